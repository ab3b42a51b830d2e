use std::sync::Arc;
use std::time::Duration;

use idcard_providers::{
    common_models::id_card_request::LoginOutcome,
    http_client::{self, imp::reqwest_client::ReqwestClient},
    remote_api::{error::RemoteApiError, imp::http::HttpIdCardApi, MockIdCardApi},
};
use wiremock::{
    http::Method,
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    model::{AdminSession, Route},
    service::{auth_service::AuthService, error::AuthServiceError},
};

fn service(api: MockIdCardApi) -> AuthService {
    AuthService::new(Arc::new(api))
}

#[tokio::test]
async fn test_blank_admin_id_fails_without_network_call() {
    let service = service(MockIdCardApi::default());

    for admin_id in ["", "   ", "\t"] {
        let result = service.login(admin_id).await;
        assert!(matches!(result, Err(AuthServiceError::MissingAdminId)));
    }

    let state = service.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("Admin ID is required"));
    assert_eq!(state.route, Route::Login);
    assert!(!state.submitting);
}

#[tokio::test]
async fn test_successful_login_opens_dashboard() {
    let mut api = MockIdCardApi::default();
    api.expect_login()
        .withf(|admin_id| admin_id == "admin1")
        .once()
        .returning(|_| {
            Ok(LoginOutcome {
                success: true,
                message: None,
            })
        });

    let service = service(api);

    assert_eq!(service.login("admin1").await.unwrap(), Route::Dashboard);

    let state = service.snapshot().await;
    assert_eq!(state.route, Route::Dashboard);
    assert_eq!(
        state.session,
        Some(AdminSession {
            admin_id: "admin1".to_string()
        })
    );
    assert_eq!(state.error, None);
    assert!(!state.submitting);
}

#[tokio::test]
async fn test_rejected_login_shows_server_message() {
    let mut api = MockIdCardApi::default();
    api.expect_login().once().returning(|_| {
        Ok(LoginOutcome {
            success: false,
            message: Some("Invalid admin id".to_string()),
        })
    });

    let service = service(api);

    let err = service.login("wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid admin id");

    let state = service.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("Invalid admin id"));
    assert_eq!(state.route, Route::Login);
    assert_eq!(state.session, None);
    assert!(!service.is_submitting());
}

#[tokio::test]
async fn test_rejected_login_without_message() {
    let mut api = MockIdCardApi::default();
    api.expect_login().once().returning(|_| {
        Ok(LoginOutcome {
            success: false,
            message: None,
        })
    });

    let service = service(api);

    let err = service.login("wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed.");
}

#[tokio::test]
async fn test_network_failure_shows_generic_message() {
    let mut api = MockIdCardApi::default();
    api.expect_login().once().returning(|_| {
        Err(RemoteApiError::Transport(http_client::Error::HttpError(
            "connection refused".to_string(),
        )))
    });

    let service = service(api);

    let result = service.login("admin1").await;
    assert!(matches!(result, Err(AuthServiceError::Network(_))));

    let state = service.snapshot().await;
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred. Please try again.")
    );
    assert!(!state.submitting);
}

#[tokio::test]
async fn test_new_error_replaces_previous_one() {
    let mut api = MockIdCardApi::default();
    api.expect_login().once().returning(|_| {
        Ok(LoginOutcome {
            success: false,
            message: Some("Invalid admin id".to_string()),
        })
    });

    let service = service(api);

    let _ = service.login("").await;
    let _ = service.login("wrong").await;

    assert_eq!(
        service.snapshot().await.error.as_deref(),
        Some("Invalid admin id")
    );

    service.clear_error().await;
    assert_eq!(service.snapshot().await.error, None);
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let mut api = MockIdCardApi::default();
    api.expect_login().once().returning(|_| {
        Ok(LoginOutcome {
            success: true,
            message: None,
        })
    });

    let service = service(api);
    service.login("admin1").await.unwrap();
    service.logout().await;

    let state = service.snapshot().await;
    assert_eq!(state.route, Route::Login);
    assert_eq!(state.session, None);
}

#[tokio::test]
async fn test_stub_backend_login_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method(Method::POST))
        .and(path("/api/login"))
        .and(body_json(serde_json::json!({ "adminId": "admin1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&mock_server)
        .await;
    Mock::given(method(Method::POST))
        .and(path("/api/login"))
        .and(body_json(serde_json::json!({ "adminId": "wrong" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Invalid admin id"
        })))
        .mount(&mock_server)
        .await;

    let api = HttpIdCardApi::new(&mock_server.uri(), Arc::new(ReqwestClient::default()));
    let service = AuthService::new(Arc::new(api));

    let err = service.login("wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid admin id");
    assert_eq!(service.snapshot().await.route, Route::Login);

    assert_eq!(service.login("admin1").await.unwrap(), Route::Dashboard);
    assert_eq!(service.snapshot().await.route, Route::Dashboard);
}

#[tokio::test]
async fn test_resubmission_while_in_flight_is_refused() {
    let mock_server = MockServer::start().await;

    Mock::given(method(Method::POST))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = HttpIdCardApi::new(&mock_server.uri(), Arc::new(ReqwestClient::default()));
    let service = AuthService::new(Arc::new(api));

    let (first, second) = tokio::join!(service.login("admin1"), service.login("admin1"));

    assert_eq!(first.unwrap(), Route::Dashboard);
    assert!(matches!(second, Err(AuthServiceError::AlreadySubmitting)));
    assert!(!service.is_submitting());
}
