//! Signed session credentials for [`Client`] identities.
//!
//! A credential is a compact, self-contained string of two dot-separated
//! parts: a Base64-encoded JSON claims block and a Base64-encoded HMAC-SHA256
//! signature computed over that exact block. Validity is fully determined by
//! recomputation against a pre-shared secret, so no server-side session
//! storage exists and no revocation is possible: once issued, a credential
//! stays valid until it expires.
//!
//! [`Client`]: crate::domain::Client

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use common::DateTime;
use derive_more::{Debug, Display, Error};
use hmac::{Hmac, Mac as _};
use secrecy::{ExposeSecret as _, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq as _;

#[cfg(doc)]
use crate::domain::Client;
use crate::domain::client::{self, session, Session};

/// HMAC-SHA256 instance signing and verifying credentials.
type HmacSha256 = Hmac<Sha256>;

/// Separator between the claims block and the signature of a credential.
const SEPARATOR: char = '.';

/// Issuer and verifier of [`Client`] [`Session`] credentials.
///
/// Stateless: both operations are pure functions of their inputs and the
/// pre-shared secret, so any number of concurrent callers may share one
/// instance without coordination.
#[derive(Clone, Debug)]
pub struct SessionTokens {
    /// Pre-shared secret signing and verifying credentials.
    #[debug(skip)]
    secret: SecretString,

    /// Lifetime of issued credentials.
    ttl: Duration,
}

impl SessionTokens {
    /// Default lifetime of an issued credential.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// Creates a new [`SessionTokens`] signing with the provided `secret`.
    #[must_use]
    pub fn new(secret: SecretString) -> Self {
        Self::with_ttl(secret, Self::DEFAULT_TTL)
    }

    /// Creates a new [`SessionTokens`] issuing credentials with the provided
    /// lifetime.
    #[must_use]
    pub const fn with_ttl(secret: SecretString, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Issues a new credential for the provided [`Client`] identity.
    ///
    /// The caller is expected to have verified the identity (password check,
    /// registration) beforehand: no validation happens here.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn issue(&self, subject_id: client::Id, email: &client::Email) -> Issued {
        let claims = Session {
            subject_id,
            email: email.to_string(),
            kind: session::Kind::client(),
            expires_at: (DateTime::now() + self.ttl).coerce(),
        };

        let block = serde_json::to_vec(&claims).expect("infallible");
        let token = format!(
            "{}{SEPARATOR}{}",
            BASE64.encode(&block),
            BASE64.encode(self.sign(&block)),
        );

        // SAFETY: assembled in the two-part credential format.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let token = unsafe { session::Token::new_unchecked(token) };

        Issued { token, claims }
    }

    /// Verifies the provided credential, returning its [`Session`] claims.
    ///
    /// The input is treated as untrusted: the signature is recomputed over
    /// the received claims block and compared in constant time before any of
    /// the claims are acted upon.
    ///
    /// # Errors
    ///
    /// Every [`VerifyError`] kind is terminal: nothing is retried, and the
    /// caller must re-authenticate to obtain a fresh credential.
    pub fn verify(
        &self,
        token: &session::Token,
    ) -> Result<Session, VerifyError> {
        use VerifyError as E;

        let (claims_part, signature_part) =
            token.as_ref().split_once(SEPARATOR).ok_or(E::Malformed)?;
        if claims_part.is_empty() || signature_part.is_empty() {
            return Err(E::Malformed);
        }

        let block = BASE64.decode(claims_part).map_err(|_| E::Malformed)?;
        let claims =
            serde_json::from_slice::<Session>(&block).map_err(|_| E::Malformed)?;

        // Corruption of the signature segment reports as a signature
        // failure, not as a malformed credential.
        let provided =
            BASE64.decode(signature_part).map_err(|_| E::InvalidSignature)?;
        let expected = self.sign(&block);
        if !bool::from(expected.ct_eq(&provided)) {
            tracing::warn!("session credential signature mismatch");
            return Err(E::InvalidSignature);
        }

        if claims.expires_at <= DateTime::now().coerce() {
            return Err(E::Expired);
        }
        if !claims.kind.is_client() {
            return Err(E::WrongKind);
        }

        Ok(claims)
    }

    /// Computes the HMAC-SHA256 signature of the provided claims block.
    fn sign(&self, block: &[u8]) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
                .expect("HMAC accepts keys of any size");
        mac.update(block);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Freshly issued credential along with its [`Session`] claims.
#[derive(Clone, Debug)]
pub struct Issued {
    /// Opaque signed credential.
    pub token: session::Token,

    /// [`Session`] claims embedded into the credential.
    pub claims: Session,
}

/// Rejection of a credential by [`SessionTokens::verify()`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum VerifyError {
    /// Credential is not parseable into a signed claims block.
    #[display("malformed credential")]
    Malformed,

    /// Signature doesn't match the one recomputed with the pre-shared
    /// secret: the claims block was tampered with, or the credential was
    /// signed with a different secret.
    #[display("credential signature mismatch")]
    InvalidSignature,

    /// Credential has expired.
    #[display("credential has expired")]
    Expired,

    /// Credential is well-formed and well-signed, but was minted for a
    /// different purpose.
    #[display("wrong credential kind")]
    WrongKind,
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use common::DateTime;
    use secrecy::SecretString;

    use crate::domain::client::{self, session};

    use super::{SessionTokens, VerifyError};

    fn tokens() -> SessionTokens {
        SessionTokens::new(SecretString::from("test-secret"))
    }

    fn email() -> client::Email {
        client::Email::new("a@b.com").unwrap()
    }

    /// Reassembles a credential from the given raw parts.
    fn assemble(claims: &str, signature: &[u8]) -> session::Token {
        let token =
            format!("{}.{}", BASE64.encode(claims), BASE64.encode(signature));
        #[expect(unsafe_code, reason = "test input")]
        unsafe {
            session::Token::new_unchecked(token)
        }
    }

    fn raw(token: &str) -> session::Token {
        #[expect(unsafe_code, reason = "test input")]
        unsafe {
            session::Token::new_unchecked(token.to_owned())
        }
    }

    #[test]
    fn roundtrips() {
        let tokens = tokens();
        let id = client::Id::new();

        let issued = tokens.issue(id, &email());
        let claims = tokens.verify(&issued.token).unwrap();

        assert_eq!(claims.subject_id, id);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.kind.is_client());
        assert_eq!(claims.expires_at, issued.claims.expires_at);
    }

    #[test]
    fn credential_has_two_nonempty_parts() {
        let issued = tokens().issue(client::Id::new(), &email());

        let token: &str = issued.token.as_ref();
        let (claims, signature) = token.split_once('.').unwrap();
        assert!(!claims.is_empty());
        assert!(!signature.is_empty());
    }

    #[test]
    fn expires_in_seven_days() {
        let before = DateTime::now().unix_timestamp();
        let issued = tokens().issue(client::Id::new(), &email());
        let after = DateTime::now().unix_timestamp();

        let expires_at = issued.claims.expires_at.unix_timestamp();
        assert!(expires_at >= before + 604_800);
        assert!(expires_at <= after + 604_800);
    }

    #[test]
    fn verification_is_idempotent() {
        let tokens = tokens();
        let issued = tokens.issue(client::Id::new(), &email());

        let first = tokens.verify(&issued.token).unwrap();
        let second = tokens.verify(&issued.token).unwrap();

        assert_eq!(first.subject_id, second.subject_id);
        assert_eq!(first.email, second.email);
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.expires_at, second.expires_at);
    }

    #[test]
    fn rejects_missing_separator_and_empty_segments() {
        let tokens = tokens();

        for input in ["", "justonesegment", ".signature", "claims.", "."] {
            assert_eq!(
                tokens.verify(&raw(input)).unwrap_err(),
                VerifyError::Malformed,
                "accepted `{input}`",
            );
        }
    }

    #[test]
    fn rejects_undecodable_claims() {
        assert_eq!(
            tokens().verify(&raw("!!!not-base64!!!.c2ln")).unwrap_err(),
            VerifyError::Malformed,
        );
    }

    #[test]
    fn rejects_well_signed_non_json_claims() {
        let tokens = tokens();
        let block = "not json at all";

        let token = assemble(block, &tokens.sign(block.as_bytes()));
        assert_eq!(tokens.verify(&token).unwrap_err(), VerifyError::Malformed);
    }

    #[test]
    fn rejects_claims_with_unknown_fields() {
        let tokens = tokens();
        let exp = DateTime::now().unix_timestamp() + 600;
        let block = format!(
            r#"{{"subjectId":"{}","email":"a@b.com","kind":"client","expiresAt":{exp},"admin":true}}"#,
            client::Id::new(),
        );

        let token = assemble(&block, &tokens.sign(block.as_bytes()));
        assert_eq!(tokens.verify(&token).unwrap_err(), VerifyError::Malformed);
    }

    #[test]
    fn rejects_claims_with_missing_fields() {
        let tokens = tokens();
        let block = format!(r#"{{"subjectId":"{}"}}"#, client::Id::new());

        let token = assemble(&block, &tokens.sign(block.as_bytes()));
        assert_eq!(tokens.verify(&token).unwrap_err(), VerifyError::Malformed);
    }

    #[test]
    fn rejects_any_claims_corruption() {
        let tokens = tokens();
        let issued = tokens.issue(client::Id::new(), &email());

        let token: &str = issued.token.as_ref();
        let (claims, _) = token.split_once('.').unwrap();
        for i in 0..claims.len() {
            let mut corrupted = token.to_owned();
            let original = corrupted.as_bytes()[i];
            let replacement = if original == b'A' { b'B' } else { b'A' };
            // SAFETY: both bytes are ASCII.
            #[expect(unsafe_code, reason = "ASCII-only replacement")]
            unsafe {
                corrupted.as_bytes_mut()[i] = replacement;
            }

            let outcome = tokens.verify(&raw(&corrupted));
            assert!(
                matches!(
                    outcome,
                    Err(VerifyError::InvalidSignature
                        | VerifyError::Malformed),
                ),
                "corruption at byte {i} yielded {outcome:?}",
            );
        }
    }

    #[test]
    fn rejects_any_signature_corruption() {
        let tokens = tokens();
        let issued = tokens.issue(client::Id::new(), &email());

        let token: &str = issued.token.as_ref();
        let (claims, _) = token.split_once('.').unwrap();
        for i in (claims.len() + 1)..token.len() {
            let mut corrupted = token.to_owned();
            let original = corrupted.as_bytes()[i];
            let replacement = if original == b'A' { b'B' } else { b'A' };
            // SAFETY: both bytes are ASCII.
            #[expect(unsafe_code, reason = "ASCII-only replacement")]
            unsafe {
                corrupted.as_bytes_mut()[i] = replacement;
            }

            assert_eq!(
                tokens.verify(&raw(&corrupted)).unwrap_err(),
                VerifyError::InvalidSignature,
                "corruption at byte {i}",
            );
        }
    }

    #[test]
    fn rejects_credential_of_other_secret() {
        let issued = SessionTokens::new(SecretString::from("other-secret"))
            .issue(client::Id::new(), &email());

        assert_eq!(
            tokens().verify(&issued.token).unwrap_err(),
            VerifyError::InvalidSignature,
        );
    }

    #[test]
    fn rejects_expired_credential() {
        let tokens = SessionTokens::with_ttl(
            SecretString::from("test-secret"),
            Duration::ZERO,
        );

        let issued = tokens.issue(client::Id::new(), &email());
        assert_eq!(
            tokens.verify(&issued.token).unwrap_err(),
            VerifyError::Expired,
        );
    }

    #[test]
    fn rejects_well_signed_foreign_kind() {
        let tokens = tokens();
        let exp = DateTime::now().unix_timestamp() + 600;
        let block = format!(
            r#"{{"subjectId":"{}","email":"a@b.com","kind":"trainer","expiresAt":{exp}}}"#,
            client::Id::new(),
        );

        let token = assemble(&block, &tokens.sign(block.as_bytes()));
        assert_eq!(tokens.verify(&token).unwrap_err(), VerifyError::WrongKind);
    }

    #[test]
    fn expiry_is_checked_before_kind() {
        let tokens = tokens();
        let exp = DateTime::now().unix_timestamp() - 600;
        let block = format!(
            r#"{{"subjectId":"{}","email":"a@b.com","kind":"trainer","expiresAt":{exp}}}"#,
            client::Id::new(),
        );

        let token = assemble(&block, &tokens.sign(block.as_bytes()));
        assert_eq!(tokens.verify(&token).unwrap_err(), VerifyError::Expired);
    }
}
