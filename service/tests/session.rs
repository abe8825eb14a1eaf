//! Authentication flow tests against the in-memory database.

use secrecy::{SecretBox, SecretString};
use service::{
    command::{self, Command as _},
    domain::client,
    infra::InMemory,
    token, Config, Service, SessionTokens,
};

fn service() -> Service<InMemory> {
    service_with_secret("integration-secret")
}

fn service_with_secret(secret: &str) -> Service<InMemory> {
    Service::new(
        Config {
            session_tokens: SessionTokens::new(SecretString::from(secret)),
        },
        InMemory::new(),
    )
}

fn password(s: &str) -> SecretBox<client::Password> {
    SecretBox::new(Box::new(client::Password::new(s).unwrap()))
}

async fn register(
    svc: &Service<InMemory>,
    email: &str,
) -> service::domain::Client {
    svc.execute(command::RegisterClient {
        name: client::Name::new("Jane Doe").unwrap(),
        email: client::Email::new(email).unwrap(),
        password: password("correct horse"),
        goal: client::Goal::Cut,
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn registered_client_can_log_in() {
    let svc = service();
    let registered = register(&svc, "jane@coaching.test").await;

    let out = svc
        .execute(command::CreateClientSession::ByCredentials {
            email: client::Email::new("jane@coaching.test").unwrap(),
            password: password("correct horse"),
        })
        .await
        .unwrap();
    assert_eq!(out.client.id, registered.id);

    let session = svc
        .execute(command::AuthorizeClientSession { token: out.token })
        .await
        .unwrap();
    assert_eq!(session.subject_id, registered.id);
    assert_eq!(session.email, "jane@coaching.test");
    assert!(session.kind.is_client());
    assert_eq!(session.expires_at, out.expires_at);
}

#[tokio::test]
async fn session_is_issued_by_client_id_after_registration() {
    let svc = service();
    let registered = register(&svc, "jane@coaching.test").await;

    let out = svc
        .execute(command::CreateClientSession::ByClientId(registered.id))
        .await
        .unwrap();

    let session = svc
        .execute(command::AuthorizeClientSession { token: out.token })
        .await
        .unwrap();
    assert_eq!(session.subject_id, registered.id);
}

#[tokio::test]
async fn occupied_email_is_rejected() {
    let svc = service();
    drop(register(&svc, "jane@coaching.test").await);

    let err = svc
        .execute(command::RegisterClient {
            name: client::Name::new("Jane Impostor").unwrap(),
            email: client::Email::new("jane@coaching.test").unwrap(),
            password: password("another pass"),
            goal: client::Goal::Bulk,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::register_client::ExecutionError::EmailOccupied(_),
    ));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let svc = service();
    drop(register(&svc, "jane@coaching.test").await);

    let err = svc
        .execute(command::CreateClientSession::ByCredentials {
            email: client::Email::new("jane@coaching.test").unwrap(),
            password: password("incorrect horse"),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_client_session::ExecutionError::WrongCredentials,
    ));
}

#[tokio::test]
async fn unknown_email_is_rejected_as_wrong_credentials() {
    let err = service()
        .execute(command::CreateClientSession::ByCredentials {
            email: client::Email::new("nobody@coaching.test").unwrap(),
            password: password("correct horse"),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_client_session::ExecutionError::WrongCredentials,
    ));
}

#[tokio::test]
async fn valid_credential_of_vanished_client_is_rejected() {
    let svc = service();

    // Well-signed credential referencing an identity the store never had.
    let issued = svc.tokens().issue(
        client::Id::new(),
        &client::Email::new("ghost@coaching.test").unwrap(),
    );

    let err = svc
        .execute(command::AuthorizeClientSession {
            token: issued.token,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::authorize_client_session::ExecutionError::ClientNotExists(_),
    ));
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let svc = service();

    #[expect(unsafe_code, reason = "test input")]
    let token = unsafe {
        service::domain::client::session::Token::new_unchecked(
            "not-a-credential".to_owned(),
        )
    };

    let err = svc
        .execute(command::AuthorizeClientSession { token })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::authorize_client_session::ExecutionError::InvalidToken(
            token::VerifyError::Malformed,
        ),
    ));
}

#[tokio::test]
async fn credential_of_other_deployment_is_rejected() {
    let svc = service();
    let registered = register(&svc, "jane@coaching.test").await;

    let foreign = service_with_secret("other-secret")
        .tokens()
        .issue(registered.id, &registered.email);

    let err = svc
        .execute(command::AuthorizeClientSession {
            token: foreign.token,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::authorize_client_session::ExecutionError::InvalidToken(
            token::VerifyError::InvalidSignature,
        ),
    ));
}

#[tokio::test]
async fn password_update_invalidates_the_old_one() {
    let svc = service();
    let registered = register(&svc, "jane@coaching.test").await;

    let err = svc
        .execute(command::UpdateClientPassword {
            client_id: registered.id,
            new_password: password("brand new pass"),
            old_password: password("not the old one"),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::update_client_password::ExecutionError::WrongPassword,
    ));

    drop(
        svc.execute(command::UpdateClientPassword {
            client_id: registered.id,
            new_password: password("brand new pass"),
            old_password: password("correct horse"),
        })
        .await
        .unwrap(),
    );

    let err = svc
        .execute(command::CreateClientSession::ByCredentials {
            email: client::Email::new("jane@coaching.test").unwrap(),
            password: password("correct horse"),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        command::create_client_session::ExecutionError::WrongCredentials,
    ));

    drop(
        svc.execute(command::CreateClientSession::ByCredentials {
            email: client::Email::new("jane@coaching.test").unwrap(),
            password: password("brand new pass"),
        })
        .await
        .unwrap(),
    );
}
