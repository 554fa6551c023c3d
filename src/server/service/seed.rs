//! Bootstrap data created at startup.
//!
//! Each step is idempotent so seeding can run on every start.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::resource::{Action, Resource},
    server::{
        data::{party::PartyRepository, permission::PermissionRepository, role::RoleRepository},
        error::AppError,
        model::{
            party::{normalize_email, CreatePartyParam},
            permission::CreatePermissionParam,
            role::{CreateRoleParam, Role},
        },
        service::auth::{hash_password, validate_password},
    },
};

pub const ADMINISTRATOR_ROLE: &str = "Administrator";

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds permissions, the administrator role and, when credentials are given,
    /// the default administrator account.
    pub async fn run(
        &self,
        admin_email: Option<&str>,
        admin_password: Option<&str>,
    ) -> Result<(), AppError> {
        self.permissions().await?;
        let role = self.administrator_role().await?;

        match (admin_email, admin_password) {
            (Some(email), Some(password)) => self.default_admin(&role, email, password).await?,
            _ => tracing::debug!("No default administrator configured"),
        }

        Ok(())
    }

    /// Ensures one permission per resource and action
    pub async fn permissions(&self) -> Result<Vec<i32>, AppError> {
        let repo = PermissionRepository::new(self.db);

        for resource in Resource::ALL {
            for action in Action::ALL {
                repo.ensure(CreatePermissionParam {
                    resource: resource.as_str().to_string(),
                    action: action.as_str().to_string(),
                    description: Some(format!("{} {}", action.as_str(), resource.as_str())),
                })
                .await?;
            }
        }

        Ok(repo.all_ids().await?)
    }

    /// Ensures the administrator role exists and holds every permission
    pub async fn administrator_role(&self) -> Result<Role, AppError> {
        let repo = RoleRepository::new(self.db);
        let permission_ids = PermissionRepository::new(self.db).all_ids().await?;

        let role = match repo.find_by_name(ADMINISTRATOR_ROLE).await? {
            Some(role) => {
                repo.grant(role.id, permission_ids).await?;
                role
            }
            None => {
                tracing::info!("Creating {} role", ADMINISTRATOR_ROLE);
                repo.create(CreateRoleParam {
                    name: ADMINISTRATOR_ROLE.to_string(),
                    description: Some("Full access to every resource".to_string()),
                    permission_ids,
                })
                .await?
            }
        };

        Ok(repo.find_by_id(role.id).await?.unwrap_or(role))
    }

    /// Creates a confirmed administrator unless one already exists
    pub async fn default_admin(
        &self,
        role: &Role,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let repo = PartyRepository::new(self.db);
        let email = normalize_email(email);

        if repo.count_with_role(role.id).await? > 0 {
            return Ok(());
        }

        if repo.find_entity_by_email(&email).await?.is_some() {
            tracing::warn!(
                "Default administrator email {} belongs to a party without the {} role",
                email,
                ADMINISTRATOR_ROLE
            );
            return Ok(());
        }

        validate_password(password)?;

        let party = repo
            .create(CreatePartyParam {
                name: ADMINISTRATOR_ROLE.to_string(),
                email,
                phone: None,
                password_hash: hash_password(password)?,
                role_id: Some(role.id),
                jurisdiction_id: None,
                confirmed_at: Some(Utc::now()),
                confirmation_token: None,
            })
            .await?;

        tracing::info!("Created default administrator {}", party.email);

        Ok(())
    }
}
