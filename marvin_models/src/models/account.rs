use super::de::{lenient_string, null_to_default};

/// An account, as returned by `createAccount`, `listAccounts` and friends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: Option<String>,
    /// 0 - user, 1 - root admin, 2 - domain admin
    pub accounttype: Option<i32>,
    pub domainid: Option<String>,
    pub domain: Option<String>,
    pub state: Option<String>,
    pub networkdomain: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub user: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub account: Option<String>,
    pub accountid: Option<String>,
    pub domainid: Option<String>,
    pub state: Option<String>,
    pub apikey: Option<String>,
    pub secretkey: Option<String>,
}

/// Keys generated by `registerUserKeys`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserKeys {
    pub apikey: String,
    pub secretkey: String,
}

/// Session opened by the `login` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub sessionkey: Option<String>,
    pub username: Option<String>,
    pub userid: Option<String>,
    pub domainid: Option<String>,
    pub account: Option<String>,
    pub timeout: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: Option<String>,
    pub level: Option<i32>,
    pub parentdomainid: Option<String>,
    pub path: Option<String>,
}

/// Limit on one resource type of an account, a domain or a project.
/// `max` is -1 when unlimited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    /// 0 instances, 1 public IPs, 2 volumes, 3 snapshots, 4 templates...
    #[serde(default, deserialize_with = "lenient_string")]
    pub resourcetype: Option<String>,
    pub max: Option<i64>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceCount {
    #[serde(default, deserialize_with = "lenient_string")]
    pub resourcetype: Option<String>,
    pub resourcecount: Option<i64>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn account_with_users() {
        let account: Account = serde_json::from_str(
            r#"{
                "id": "7d6a5a6e-5c59-4a6c-a0b8-35e8c3b2a8e5",
                "name": "test-A1B2C3",
                "accounttype": 0,
                "domainid": "1",
                "domain": "ROOT",
                "state": "enabled",
                "user": [{"id": "u-1", "username": "test-A1B2C3", "email": "test@test.com"}]
            }"#,
        )
        .unwrap();
        assert_eq!(account.name.as_deref(), Some("test-A1B2C3"));
        assert_eq!(account.user.len(), 1);
        assert_eq!(account.user[0].email.as_deref(), Some("test@test.com"));
    }

    #[test]
    fn account_without_users() {
        let account: Account = serde_json::from_str(r#"{"id": "1", "user": null}"#).unwrap();
        assert!(account.user.is_empty());
        assert_eq!(account.accounttype, None);
    }

    #[test]
    fn unlimited_resource() {
        let limit: ResourceLimit = serde_json::from_str(
            r#"{"resourcetype": "0", "max": -1, "account": "admin", "domainid": "1"}"#,
        )
        .unwrap();
        assert_eq!(limit.resourcetype.as_deref(), Some("0"));
        assert_eq!(limit.max, Some(-1));

        let count: ResourceCount =
            serde_json::from_str(r#"{"resourcetype": 2, "resourcecount": 5}"#).unwrap();
        assert_eq!(count.resourcetype.as_deref(), Some("2"));
    }
}
