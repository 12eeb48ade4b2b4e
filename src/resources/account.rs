use marvin_models::models as m;
use tracing::{info, instrument};

use super::wrap_all;
use crate::api::account::{
    DeleteAccount, DeleteUser, DisableAccount, EnableAccount, ListAccounts, ListDomains,
    ListResourceLimits, ListUsers, Login, RegisterUserKeys, UpdateResourceCount,
    UpdateResourceLimit, UpdateUser,
};
use crate::api::execute;
use crate::builder::{
    account::{AccountBuilder, UserBuilder},
    Builder,
};
use crate::client::ApiClient;
use crate::Result;

resource!(Account(m::Account));

impl Account {
    /// The user name is made unique with the client id and a random suffix
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: AccountBuilder) -> Result<Account> {
        let cmd = builder.with_client_id(client.id()).try_build()?;
        let account = execute(client, &cmd).await?;
        info!("Created account {} ({})", cmd.username, account.id);
        Ok(Account(account))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteAccount {
                id: self.id.clone(),
            },
        )
        .await?;
        info!("Deleted account");
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListAccounts) -> Result<Vec<Account>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    /// A locked account keeps its resources running, a disabled one has
    /// them stopped
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn disable(&self, client: &dyn ApiClient, lock: bool) -> Result<Account> {
        let account = execute(
            client,
            &DisableAccount {
                id: Some(self.id.clone()),
                lock,
                ..Default::default()
            },
        )
        .await?;
        Ok(Account(account))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn enable(&self, client: &dyn ApiClient) -> Result<Account> {
        let account = execute(
            client,
            &EnableAccount {
                id: Some(self.id.clone()),
                ..Default::default()
            },
        )
        .await?;
        Ok(Account(account))
    }
}

resource!(User(m::User));

impl User {
    #[instrument(skip_all)]
    pub async fn create(client: &dyn ApiClient, builder: UserBuilder) -> Result<User> {
        let cmd = builder.try_build()?;
        let user = execute(client, &cmd).await?;
        info!("Created user {} ({})", cmd.username, user.id);
        Ok(User(user))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn delete(&self, client: &dyn ApiClient) -> Result<()> {
        execute(
            client,
            &DeleteUser {
                id: self.id.clone(),
            },
        )
        .await?;
        Ok(())
    }

    pub async fn list(client: &dyn ApiClient, cmd: &ListUsers) -> Result<Vec<User>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }

    /// `cmd.id` is replaced with the id of this user
    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn update(&self, client: &dyn ApiClient, cmd: UpdateUser) -> Result<User> {
        let cmd = UpdateUser {
            id: self.id.clone(),
            ..cmd
        };
        Ok(User(execute(client, &cmd).await?))
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub async fn register_keys(&self, client: &dyn ApiClient) -> Result<m::UserKeys> {
        Ok(execute(
            client,
            &RegisterUserKeys {
                id: self.id.clone(),
            },
        )
        .await?)
    }

    /// Opens a session, `domain` defaults to ROOT on the server side
    pub async fn login(
        client: &dyn ApiClient,
        username: &str,
        password: &str,
        domain: Option<&str>,
    ) -> Result<m::LoginResponse> {
        Ok(execute(
            client,
            &Login {
                username: username.to_string(),
                password: password.to_string(),
                domain: domain.map(str::to_string),
                domain_id: None,
            },
        )
        .await?)
    }
}

resource!(Domain(m::Domain));

impl Domain {
    pub async fn list(client: &dyn ApiClient, cmd: &ListDomains) -> Result<Vec<Domain>> {
        Ok(wrap_all(execute(client, cmd).await?))
    }
}

/// Resource limits and usage counts of accounts, domains and projects
#[derive(Debug)]
pub struct Resources;

impl Resources {
    pub const VM: i32 = 0;
    pub const PUBLIC_IP: i32 = 1;
    pub const VOLUME: i32 = 2;
    pub const SNAPSHOT: i32 = 3;
    pub const TEMPLATE: i32 = 4;
    pub const NETWORK: i32 = 6;
    pub const VPC: i32 = 7;
    pub const CPU: i32 = 8;
    pub const MEMORY: i32 = 9;

    pub async fn list(
        client: &dyn ApiClient,
        cmd: &ListResourceLimits,
    ) -> Result<Vec<m::ResourceLimit>> {
        Ok(execute(client, cmd).await?)
    }

    /// `max` of `None` or -1 lifts the limit
    #[instrument(skip_all, fields(resourcetype = cmd.resourcetype))]
    pub async fn update_limit(
        client: &dyn ApiClient,
        cmd: &UpdateResourceLimit,
    ) -> Result<m::ResourceLimit> {
        let limit = execute(client, cmd).await?;
        info!("Resource limit set to {:?}", limit.max);
        Ok(limit)
    }

    pub async fn update_count(
        client: &dyn ApiClient,
        cmd: &UpdateResourceCount,
    ) -> Result<Vec<m::ResourceCount>> {
        Ok(execute(client, cmd).await?)
    }
}

impl Account {
    /// Caps one resource type for this account
    pub async fn limit(
        &self,
        client: &dyn ApiClient,
        resourcetype: i32,
        max: i64,
    ) -> Result<m::ResourceLimit> {
        let cmd = UpdateResourceLimit {
            resourcetype,
            max: Some(max),
            account: self.name.clone(),
            domainid: self.domainid.clone(),
            projectid: None,
        };
        Resources::update_limit(client, &cmd).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApiClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn create_account_with_client_id() {
        let client = FakeApiClient::new().with_id("session42");
        client.respond(
            "createAccount",
            json!({"account": {"id": "a1", "name": "test-session42-ABCDEF", "domainid": "d1"}}),
        );

        let account = Account::create(&client, AccountBuilder::test_account().with_domain("d1"))
            .await
            .unwrap();
        assert_eq!(account.id, "a1");
        assert_eq!(account.domainid.as_deref(), Some("d1"));

        let request = &client.requests_for("createAccount")[0];
        let username = request.params.get("username").unwrap();
        assert!(username.starts_with("test-session42-"));
        assert_eq!(request.params.get("accounttype"), Some("0"));
    }

    #[tokio::test]
    async fn disable_with_lock() {
        let client = FakeApiClient::new();
        client.respond(
            "disableAccount",
            json!({"account": {"id": "a1", "state": "locked"}}),
        );
        let account = Account(m::Account {
            id: "a1".to_string(),
            ..Default::default()
        });

        let locked = account.disable(&client, true).await.unwrap();
        assert_eq!(locked.state.as_deref(), Some("locked"));
        let request = &client.requests()[0];
        assert!(request.is_async);
        assert_eq!(request.params.get("lock"), Some("true"));
    }

    #[tokio::test]
    async fn update_targets_the_user() {
        let client = FakeApiClient::new();
        client.respond("updateUser", json!({"user": {"id": "u1", "email": "new@test.com"}}));
        let user = User(m::User {
            id: "u1".to_string(),
            ..Default::default()
        });

        let updated = user
            .update(
                &client,
                UpdateUser {
                    email: Some("new@test.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email.as_deref(), Some("new@test.com"));
        assert_eq!(client.requests()[0].params.get("id"), Some("u1"));
    }

    #[tokio::test]
    async fn account_vm_limit() {
        let client = FakeApiClient::new();
        client.respond(
            "updateResourceLimit",
            json!({"resourcelimit": {"resourcetype": "0", "max": 2, "account": "test-1"}}),
        );
        let account = Account(m::Account {
            id: "a1".to_string(),
            name: Some("test-1".to_string()),
            domainid: Some("d1".to_string()),
            ..Default::default()
        });

        let limit = account.limit(&client, Resources::VM, 2).await.unwrap();
        assert_eq!(limit.max, Some(2));
        let request = &client.requests()[0];
        assert!(!request.is_async);
        assert_eq!(request.params.get("resourcetype"), Some("0"));
        assert_eq!(request.params.get("max"), Some("2"));
        assert_eq!(request.params.get("account"), Some("test-1"));
        assert_eq!(request.params.get("domainid"), Some("d1"));
    }

    #[tokio::test]
    async fn recount_domain_usage() {
        let client = FakeApiClient::new();
        client.respond(
            "updateResourceCount",
            json!({"count": 2, "resourcecount": [
                {"resourcetype": "0", "resourcecount": 3, "domainid": "d1"},
                {"resourcetype": "2", "resourcecount": 5, "domainid": "d1"}
            ]}),
        );

        let counts = Resources::update_count(
            &client,
            &UpdateResourceCount {
                domainid: "d1".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[1].resourcecount, Some(5));
        assert_eq!(client.requests()[0].params.get("resourcetype"), None);
    }
}
