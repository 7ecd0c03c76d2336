//! 资源路径匹配算法
//!
//! 资源路径是 `/` 分隔的层级字符串。匹配规则按顺序评估，先命中者生效。
//! 规则 3 在规则 4 之前：子树策略 (`/*`) 只按前缀判定，
//! 永远不会落入祖先可读分支。这个顺序不能调换。

use super::policy::{Action, Policy};

/// 判断策略资源是否允许对请求资源执行操作
pub fn matches(policy_resource: &str, request_resource: &str, action: Action) -> bool {
    // 根策略放行全部资源
    if policy_resource == "*" {
        return true;
    }

    // 精确命中。例如 blogs/123/*, blogs
    if policy_resource == request_resource {
        return true;
    }

    // 子树策略覆盖其下所有资源。例如 blogs/* 覆盖 blogs/123
    if policy_resource.ends_with("/*") {
        let prefix = &policy_resource[..policy_resource.len() - 1]; // blogs/* -> blogs/
        return request_resource.starts_with(prefix);
    }

    // 持有某个具体资源的策略时，可以读（但不能写）它的祖先路径。
    // 例如持有 blogs/11/pages/12，可读 blogs/11，不可写
    action == Action::Read && policy_resource.starts_with(request_resource)
}

/// 判断已有策略集中是否存在覆盖 resource 的更宽策略
pub fn has_broader_policy(resource: &str, existing: &[Policy]) -> bool {
    existing.iter().any(|policy| covers(&policy.resource, resource))
}

/// 判断 policy_resource 的作用域是否覆盖 resource
fn covers(policy_resource: &str, resource: &str) -> bool {
    if policy_resource == "*" {
        return true;
    }
    if policy_resource == resource {
        return true;
    }
    if policy_resource.ends_with("/*") {
        let prefix = &policy_resource[..policy_resource.len() - 1];
        return resource.starts_with(prefix);
    }
    false
}

/// 计算新策略的清理前缀：以该前缀开头的更窄策略会被批量删除
///
/// 精确资源的前缀带尾部分隔符，因此与新策略完全相同的精确策略
/// 不会被前缀删除命中，而是在更宽策略检查里按相等被拒绝
pub fn resource_prefix(resource: &str) -> String {
    if resource == "*" {
        return String::new(); // 根策略没有前缀
    }

    if resource.ends_with("/*") {
        return resource[..resource.len() - 1].to_string(); // blogs/* -> blogs/
    }

    if resource.ends_with('/') {
        return resource.to_string();
    }

    format!("{}/", resource)
}
