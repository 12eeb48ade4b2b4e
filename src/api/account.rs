//! Accounts, users, domains and resource limits
use marvin_models::models::{
    Account, Domain, LoginResponse, ResourceCount, ResourceLimit, Success, User, UserKeys,
};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAccount {
    /// 0 - user, 1 - root admin, 2 - domain admin
    pub accounttype: i32,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub username: String,
    pub domainid: Option<String>,
    pub account: Option<String>,
    pub accountid: Option<String>,
    pub userid: Option<String>,
    pub networkdomain: Option<String>,
    pub timezone: Option<String>,
}
command!(sync CreateAccount, "createAccount", "account" => Account);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteAccount {
    pub id: String,
}
command!(async DeleteAccount, "deleteAccount" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListAccounts {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domainid: Option<String>,
    pub accounttype: Option<i32>,
    pub state: Option<String>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
}
command!(list ListAccounts, "listAccounts", "account" => Account);

/// Disable an account, `lock` only prevents logins instead of stopping its
/// resources.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisableAccount {
    pub id: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub lock: bool,
}
command!(async DisableAccount, "disableAccount", "account" => Account);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnableAccount {
    pub id: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
}
command!(sync EnableAccount, "enableAccount", "account" => Account);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateUser {
    pub account: String,
    pub domainid: Option<String>,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub username: String,
    pub userid: Option<String>,
    pub timezone: Option<String>,
}
command!(sync CreateUser, "createUser", "user" => User);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteUser {
    pub id: String,
}
command!(sync DeleteUser, "deleteUser" => Success);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListUsers {
    pub id: Option<String>,
    pub username: Option<String>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub accounttype: Option<i32>,
    pub state: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListUsers, "listUsers", "user" => User);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUser {
    pub id: String,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub timezone: Option<String>,
    pub userapikey: Option<String>,
    pub usersecretkey: Option<String>,
}
command!(sync UpdateUser, "updateUser", "user" => User);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterUserKeys {
    pub id: String,
}
command!(sync RegisterUserKeys, "registerUserKeys", "userkeys" => UserKeys);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Login {
    pub username: String,
    pub password: String,
    /// Domain path, ROOT when unset
    pub domain: Option<String>,
    #[serde(rename = "domainId")]
    pub domain_id: Option<String>,
}
command!(sync Login, "login" => LoginResponse);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListDomains {
    pub id: Option<String>,
    pub name: Option<String>,
    pub level: Option<i32>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListDomains, "listDomains", "domain" => Domain);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListResourceLimits {
    pub id: Option<String>,
    pub resourcetype: Option<i32>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
}
command!(list ListResourceLimits, "listResourceLimits", "resourcelimit" => ResourceLimit);

/// Sets the limit of one resource type, `max` -1 removes it
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateResourceLimit {
    pub resourcetype: i32,
    pub max: Option<i64>,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub projectid: Option<String>,
}
command!(sync UpdateResourceLimit, "updateResourceLimit", "resourcelimit" => ResourceLimit);

/// Recounts what an account or a domain uses, every type unless
/// `resourcetype` is set
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateResourceCount {
    pub domainid: String,
    pub account: Option<String>,
    pub projectid: Option<String>,
    pub resourcetype: Option<i32>,
}
command!(collection UpdateResourceCount, "updateResourceCount", "resourcecount" => ResourceCount);
