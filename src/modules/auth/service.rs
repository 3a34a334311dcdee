use anyhow::anyhow;
use catalog_auth::{TOKEN_TYPE, create_access_token};
use catalog_config::JwtConfig;
use catalog_core::{AppError, hash_password, parse_status_flag, require_non_blank, verify_password};
use catalog_db::Entity;
use catalog_models::{LoginRequest, LoginResponse, RegisterRequest, User, roles};
use catalog_observability::{
    track_jwt_issued, track_login_failure, track_login_success, track_user_registered,
};
use sqlx::PgPool;
use tracing::{info, instrument};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct AuthService;

impl AuthService {
    async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE username = $1", User::COLUMNS, User::TABLE);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    /// Creates an inactive `USER` account.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<(), AppError> {
        let username = require_non_blank(&dto.username, "username")?;
        let password = require_non_blank(&dto.password, "password")?;

        if Self::find_by_username(db, username).await?.is_some() {
            return Err(AppError::conflict(anyhow!("Username already exists")));
        }

        let hashed_password = hash_password(password)?;

        sqlx::query(
            "INSERT INTO users (username, password, role, is_active) VALUES ($1, $2, $3, FALSE)",
        )
        .bind(username)
        .bind(&hashed_password)
        .bind(roles::USER)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow!("Username already exists"));
                }
            }
            AppError::from(e)
        })?;

        track_user_registered();
        info!("User registered");
        Ok(())
    }

    /// Checks credentials and issues an access token.
    ///
    /// The password is verified before the active flag, so only a caller who
    /// knows the password learns that the account is inactive.
    #[instrument(skip(db, jwt_config, dto), fields(username = %dto.username))]
    pub async fn login(
        db: &PgPool,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let username = require_non_blank(&dto.username, "username")?;
        require_non_blank(&dto.password, "password")?;

        let Some(user) = Self::find_by_username(db, username).await? else {
            track_login_failure("unknown_user");
            return Err(AppError::invalid_credentials(anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &user.password)? {
            track_login_failure("bad_password");
            return Err(AppError::invalid_credentials(anyhow!(INVALID_CREDENTIALS)));
        }

        if !user.is_active {
            track_login_failure("inactive");
            return Err(AppError::invalid_credentials(anyhow!(
                "This user account is not active"
            )));
        }

        let token = create_access_token(
            &user.id_hash,
            &user.username,
            &user.role,
            user.is_active,
            jwt_config,
        )?;

        track_login_success(&user.role);
        track_jwt_issued();

        Ok(LoginResponse {
            token,
            token_type: TOKEN_TYPE.to_string(),
            expiry_time: jwt_config.access_token_expiry,
        })
    }

    /// Sets `is_active` from a `true`/`false` path literal.
    #[instrument(skip(db))]
    pub async fn set_active(db: &PgPool, id_hash: &str, status: &str) -> Result<(), AppError> {
        let id_hash = require_non_blank(id_hash, "id_hash")?;
        let active = parse_status_flag(status)?;

        let result =
            sqlx::query("UPDATE users SET is_active = $2, updated_at = NOW() WHERE id_hash = $1")
                .bind(id_hash)
                .bind(active)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(
                "User not found with the given id_hash"
            )));
        }

        Ok(())
    }
}
