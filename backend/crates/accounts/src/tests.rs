//! Unit tests for the accounts crate

mod support {
    use std::sync::{Arc, Mutex};

    use crate::domain::entity::{user::User, user_info::UserInfo};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::AccountsResult;
    use kernel::id::UserId;

    /// In-memory repository for use-case tests
    #[derive(Clone, Default)]
    pub struct MemoryAccountsRepository {
        pub users: Arc<Mutex<Vec<User>>>,
        pub infos: Arc<Mutex<Vec<UserInfo>>>,
    }

    impl UserRepository for MemoryAccountsRepository {
        async fn create_with_info(&self, user: &User, info: &UserInfo) -> AccountsResult<()> {
            self.users.lock().unwrap().push(user.clone());
            self.infos.lock().unwrap().push(info.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == *user_id)
                .cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == *email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.email == *email))
        }
    }

    pub fn test_config() -> Arc<crate::AccountsConfig> {
        Arc::new(crate::AccountsConfig::with_random_secret())
    }

    pub fn register_input(email: &str) -> crate::application::RegisterInput {
        crate::application::RegisterInput {
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
            name: "Tester".to_string(),
            age: 30,
            gender: "male".to_string(),
            profile_image: None,
        }
    }
}

#[cfg(test)]
mod token_tests {
    use crate::application::token::{sign_user_token, verify_user_token};
    use kernel::id::UserId;

    #[test]
    fn test_sign_verify_roundtrip() {
        let secret = [7u8; 32];
        let user_id = UserId::new();

        let token = sign_user_token(&secret, &user_id);
        assert_eq!(verify_user_token(&secret, &token), Some(user_id));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user_id = UserId::new();
        let token = sign_user_token(&[7u8; 32], &user_id);

        assert_eq!(verify_user_token(&[8u8; 32], &token), None);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let secret = [7u8; 32];
        let token = sign_user_token(&secret, &UserId::new());

        let mut tampered = token.clone();
        tampered.push('A');
        assert_eq!(verify_user_token(&secret, &tampered), None);

        // Swap the embedded id for another one, keep the signature
        let other = UserId::new();
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{}.{}", other, signature);
        assert_eq!(verify_user_token(&secret, &forged), None);
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let secret = [7u8; 32];
        assert_eq!(verify_user_token(&secret, ""), None);
        assert_eq!(verify_user_token(&secret, "no-dot-here"), None);
        assert_eq!(verify_user_token(&secret, ".sig-only"), None);
        assert_eq!(verify_user_token(&secret, "a.b.c"), None);
        assert_eq!(verify_user_token(&secret, "not-a-uuid.c2ln"), None);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{
            "email": "a@x.com",
            "password": "pw",
            "name": "Alice",
            "age": 28,
            "gender": "female",
            "profileImage": "https://img.example.com/a.png"
        }"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.age, 28);
        assert_eq!(
            request.profile_image.as_deref(),
            Some("https://img.example.com/a.png")
        );
    }

    #[test]
    fn test_register_request_profile_image_optional() {
        let json = r#"{"email":"a@x.com","password":"pw","name":"A","age":1,"gender":"m"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(request.profile_image.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let json = serde_json::to_string(&RegisterResponse {
            message: "Account created".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""message":"Account created""#));

        let json = serde_json::to_string(&LoginResponse {
            message: "Login successful".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""message":"Login successful""#));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AccountsError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AccountsError, StatusCode)> = vec![
            (AccountsError::EmailTaken, StatusCode::CONFLICT),
            (AccountsError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AccountsError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (
                AccountsError::Validation("bad email".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AccountsError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_database_error_uses_kernel_mapping() {
        let response = AccountsError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod register_tests {
    use super::support::{MemoryAccountsRepository, register_input, test_config};
    use crate::application::RegisterUseCase;
    use crate::error::AccountsError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_register_creates_user_and_info() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        let output = use_case.execute(register_input("a@x.com")).await.unwrap();

        let users = repo.users.lock().unwrap();
        let infos = repo.infos.lock().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(infos.len(), 1);
        assert_eq!(users[0].user_id, output.user_id);
        assert_eq!(infos[0].user_id, output.user_id);
        assert_eq!(users[0].email.as_str(), "a@x.com");
    }

    #[tokio::test]
    async fn test_register_uppercases_gender() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        use_case.execute(register_input("a@x.com")).await.unwrap();

        let infos = repo.infos.lock().unwrap();
        assert_eq!(infos[0].gender.as_str(), "MALE");
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        use_case.execute(register_input("a@x.com")).await.unwrap();

        let users = repo.users.lock().unwrap();
        let stored = users[0].password_hash.as_phc_string();
        assert_ne!(stored, "hunter2hunter2");
        assert!(stored.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        use_case.execute(register_input("a@x.com")).await.unwrap();
        let result = use_case.execute(register_input("a@x.com")).await;

        assert!(matches!(result, Err(AccountsError::EmailTaken)));
        // No extra rows created
        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.infos.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_invalid_email_rejected() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        let result = use_case.execute(register_input("not-an-email")).await;

        assert!(matches!(result, Err(AccountsError::Validation(_))));
        assert!(repo.users.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod login_tests {
    use super::support::{MemoryAccountsRepository, register_input, test_config};
    use crate::application::token::verify_user_token;
    use crate::application::{LoginInput, LoginUseCase, RegisterUseCase};
    use crate::error::AccountsError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com"))
            .await
            .unwrap();

        let output = LoginUseCase::new(repo.clone(), config.clone())
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        // The embedded identifier matches the authenticated user
        assert_eq!(
            verify_user_token(&config.token_secret, &output.token),
            Some(registered.user_id)
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_rejected() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com"))
            .await
            .unwrap();

        let result = LoginUseCase::new(repo.clone(), config.clone())
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountsError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_indistinguishable() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com"))
            .await
            .unwrap();

        let use_case = LoginUseCase::new(repo.clone(), config.clone());

        let unknown_email = match use_case
            .execute(LoginInput {
                email: "b@x.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
        {
            Err(e) => e,
            Ok(_) => panic!("login with unknown email should fail"),
        };

        let wrong_password = match use_case
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
        {
            Err(e) => e,
            Ok(_) => panic!("login with wrong password should fail"),
        };

        // Same message either way; nothing leaks about the email
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }
}

#[cfg(test)]
mod verify_token_tests {
    use super::support::{MemoryAccountsRepository, register_input, test_config};
    use crate::application::token::sign_user_token;
    use crate::application::{RegisterUseCase, VerifyTokenUseCase};
    use crate::error::AccountsError;
    use kernel::id::UserId;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_verify_resolves_existing_user() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com"))
            .await
            .unwrap();

        let token = sign_user_token(&config.token_secret, &registered.user_id);

        let resolved = VerifyTokenUseCase::new(repo.clone(), config.clone())
            .execute(&token)
            .await
            .unwrap();

        assert_eq!(resolved, registered.user_id);
    }

    #[tokio::test]
    async fn test_verify_rejects_unknown_user() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        // Validly signed token, but the user was never created
        let token = sign_user_token(&config.token_secret, &UserId::new());

        let result = VerifyTokenUseCase::new(repo.clone(), config.clone())
            .execute(&token)
            .await;

        assert!(matches!(result, Err(AccountsError::TokenInvalid)));
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage() {
        let repo = Arc::new(MemoryAccountsRepository::default());
        let config = test_config();

        let result = VerifyTokenUseCase::new(repo.clone(), config.clone())
            .execute("Bearer nonsense")
            .await;

        assert!(matches!(result, Err(AccountsError::TokenInvalid)));
    }
}
