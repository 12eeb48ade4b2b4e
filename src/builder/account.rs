use crate::{
    api::account::{CreateAccount, CreateUser},
    builder::{required, Builder, BuilderError},
    naming::{account_username, random_gen},
};

/// 0 - user, 1 - root admin, 2 - domain admin
fn account_type(admin: bool, domainid: &Option<String>) -> i32 {
    match (admin, domainid) {
        (true, Some(_)) => 2,
        (true, None) => 1,
        (false, _) => 0,
    }
}

#[derive(Debug, Default)]
pub struct AccountBuilder {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub domainid: Option<String>,
    pub admin: bool,
    /// Id of the API client creating the account, part of the user name
    pub client_id: Option<String>,
    pub account_uuid: Option<String>,
    pub user_uuid: Option<String>,
}

impl AccountBuilder {
    pub fn new() -> AccountBuilder {
        AccountBuilder::default()
    }

    /// The account preset used by the smoke test fixtures
    pub fn test_account() -> AccountBuilder {
        AccountBuilder::new()
            .with_email("test@test.com")
            .with_firstname("Test")
            .with_lastname("User")
            .with_username("test")
            .with_password("password")
    }

    pub fn with_email(mut self, email: &str) -> AccountBuilder {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_firstname(mut self, firstname: &str) -> AccountBuilder {
        self.firstname = Some(firstname.to_string());
        self
    }

    pub fn with_lastname(mut self, lastname: &str) -> AccountBuilder {
        self.lastname = Some(lastname.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> AccountBuilder {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_password(mut self, password: &str) -> AccountBuilder {
        self.password = Some(password.to_string());
        self
    }

    pub fn with_domain(mut self, domainid: &str) -> AccountBuilder {
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn as_admin(mut self) -> AccountBuilder {
        self.admin = true;
        self
    }

    pub fn with_client_id(mut self, client_id: &str) -> AccountBuilder {
        self.client_id = Some(client_id.to_string());
        self
    }

    /// Prefix of the account uuid, suffixed randomly
    pub fn with_account_uuid(mut self, uuid: &str) -> AccountBuilder {
        self.account_uuid = Some(uuid.to_string());
        self
    }

    /// Prefix of the first user's uuid, suffixed randomly
    pub fn with_user_uuid(mut self, uuid: &str) -> AccountBuilder {
        self.user_uuid = Some(uuid.to_string());
        self
    }
}

impl Builder<CreateAccount> for AccountBuilder {
    fn try_build(self) -> Result<CreateAccount, BuilderError> {
        let email = required("email", self.email)?;
        let firstname = required("firstname", self.firstname)?;
        let lastname = required("lastname", self.lastname)?;
        let username = required("username", self.username)?;
        let password = required("password", self.password)?;
        let client_id = self.client_id.unwrap_or_default();

        Ok(CreateAccount {
            accounttype: account_type(self.admin, &self.domainid),
            email,
            firstname,
            lastname,
            password,
            username: account_username(&username, &client_id),
            accountid: self
                .account_uuid
                .map(|uuid| random_gen(Some(uuid.as_str()), 6)),
            userid: self.user_uuid.map(|uuid| random_gen(Some(uuid.as_str()), 6)),
            domainid: self.domainid,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_uuid: Option<String>,
}

impl UserBuilder {
    pub fn new() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn with_account(mut self, account: &str) -> UserBuilder {
        self.account = Some(account.to_string());
        self
    }

    pub fn with_domain(mut self, domainid: &str) -> UserBuilder {
        self.domainid = Some(domainid.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> UserBuilder {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_firstname(mut self, firstname: &str) -> UserBuilder {
        self.firstname = Some(firstname.to_string());
        self
    }

    pub fn with_lastname(mut self, lastname: &str) -> UserBuilder {
        self.lastname = Some(lastname.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> UserBuilder {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_password(mut self, password: &str) -> UserBuilder {
        self.password = Some(password.to_string());
        self
    }

    pub fn with_user_uuid(mut self, uuid: &str) -> UserBuilder {
        self.user_uuid = Some(uuid.to_string());
        self
    }
}

impl Builder<CreateUser> for UserBuilder {
    fn try_build(self) -> Result<CreateUser, BuilderError> {
        let username = required("username", self.username)?;
        Ok(CreateUser {
            account: required("account", self.account)?,
            email: required("email", self.email)?,
            firstname: required("firstname", self.firstname)?,
            lastname: required("lastname", self.lastname)?,
            password: required("password", self.password)?,
            username: random_gen(Some(username.as_str()), 6),
            userid: self.user_uuid.map(|uuid| random_gen(Some(uuid.as_str()), 6)),
            domainid: self.domainid,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn account_types() {
        let user = AccountBuilder::test_account().try_build().unwrap();
        assert_eq!(user.accounttype, 0);

        let root_admin = AccountBuilder::test_account().as_admin().try_build().unwrap();
        assert_eq!(root_admin.accounttype, 1);

        let domain_admin = AccountBuilder::test_account()
            .as_admin()
            .with_domain("d1")
            .try_build()
            .unwrap();
        assert_eq!(domain_admin.accounttype, 2);
        assert_eq!(domain_admin.domainid.as_deref(), Some("d1"));
    }

    #[test]
    fn account_username_is_unique() {
        let account = AccountBuilder::test_account()
            .with_username("testaccount")
            .with_client_id("client1")
            .with_account_uuid("acc")
            .try_build()
            .unwrap();
        assert!(account.username.starts_with("testac-client1-"));
        assert!(account.accountid.unwrap().starts_with("acc-"));
        assert_eq!(account.userid, None);
    }

    #[test]
    fn account_missing_email() {
        let err = AccountBuilder::new()
            .with_firstname("a")
            .with_lastname("b")
            .with_username("c")
            .with_password("d")
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("email".to_string()));
    }

    #[test]
    fn user_requires_account() {
        let err = UserBuilder::new()
            .with_email("a@b.c")
            .with_firstname("a")
            .with_lastname("b")
            .with_username("user")
            .with_password("p")
            .try_build()
            .unwrap_err();
        assert_eq!(err, BuilderError::MissingRequiredField("account".to_string()));
    }
}
