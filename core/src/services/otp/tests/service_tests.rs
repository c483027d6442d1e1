use std::sync::Arc;

use chrono::{Duration, Utc};

use super::mocks::{ScriptedProvider, VecCodeRepository, VecDeliveryLog};
use crate::domain::entities::{DeliveryStatus, MessageType, VerificationCode};
use crate::errors::DomainError;
use crate::repositories::CodeRepository;
use crate::services::otp::OtpService;
use crate::services::provider::ProviderRegistry;

struct Harness {
    provider: Arc<ScriptedProvider>,
    codes: Arc<VecCodeRepository>,
    log: Arc<VecDeliveryLog>,
    service: OtpService,
}

fn harness() -> Harness {
    let provider = Arc::new(ScriptedProvider::new("mock"));
    let codes = Arc::new(VecCodeRepository::new());
    let log = Arc::new(VecDeliveryLog::new());

    let mut registry = ProviderRegistry::new("mock");
    registry.register(provider.clone());

    let service = OtpService::new(Arc::new(registry), codes.clone(), log.clone(), 5);
    Harness {
        provider,
        codes,
        log,
        service,
    }
}

#[tokio::test]
async fn send_otp_persists_code_and_logs_delivery() {
    let h = harness();

    h.service
        .send_otp("+14155550100", None, None, MessageType::Otp)
        .await
        .unwrap();

    assert_eq!(h.codes.len(), 1);
    assert_eq!(h.log.len(), 1);
    assert_eq!(h.log.statuses(), vec![DeliveryStatus::Delivered]);

    let sent = h.provider.sent.lock().unwrap();
    let (phone, body) = &sent[0];
    assert_eq!(phone, "+14155550100");
    assert!(body.contains("Your OTP verification code is:"));
    assert!(body.contains("Valid for 5 minutes."));
}

#[tokio::test]
async fn send_otp_failure_still_logs_exactly_one_record() {
    let h = harness();
    h.provider.fail_for("+14155550100");

    let err = h
        .service
        .send_otp("+14155550100", None, None, MessageType::Otp)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Provider { .. }));

    // One code row and one Failed record, no silent drop.
    assert_eq!(h.codes.len(), 1);
    assert_eq!(h.log.statuses(), vec![DeliveryStatus::Failed]);
    let records = h.log.records.lock().unwrap();
    assert!(records[0].error_message.is_some());
}

#[tokio::test]
async fn send_otp_unknown_provider_writes_nothing() {
    let h = harness();

    let err = h
        .service
        .send_otp("+14155550100", Some("nexmo"), None, MessageType::Otp)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(h.codes.len(), 0);
    assert_eq!(h.log.len(), 0);
}

#[tokio::test]
async fn verify_consumes_matching_code() {
    let h = harness();
    h.service
        .send_otp("+14155550100", None, None, MessageType::Otp)
        .await
        .unwrap();
    let code = h
        .codes
        .find_latest_by_phone("+14155550100")
        .await
        .unwrap()
        .unwrap();

    h.service
        .verify_otp("+14155550100", &code.code)
        .await
        .unwrap();

    // Single-use: the same code cannot verify twice.
    let err = h
        .service
        .verify_otp("+14155550100", &code.code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn verify_unknown_phone_is_not_found() {
    let h = harness();
    let err = h
        .service
        .verify_otp("+14155550100", "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn verify_wrong_code_is_mismatch_and_keeps_code() {
    let h = harness();
    h.service
        .send_otp("+14155550100", None, None, MessageType::Otp)
        .await
        .unwrap();

    let err = h
        .service
        .verify_otp("+14155550100", "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeMismatch));
    assert_eq!(h.codes.len(), 1);
}

#[tokio::test]
async fn verify_only_considers_most_recent_code() {
    let h = harness();
    let now = Utc::now();
    h.codes
        .insert_at(VerificationCode::new("+14155550100", "111111"), now);
    h.codes.insert_at(
        VerificationCode::new("+14155550100", "222222"),
        now + Duration::seconds(1),
    );

    // The superseded code is permanently unusable.
    let err = h
        .service
        .verify_otp("+14155550100", "111111")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeMismatch));

    h.service.verify_otp("+14155550100", "222222").await.unwrap();
}

#[tokio::test]
async fn verify_ties_break_by_insertion_order() {
    let h = harness();
    let now = Utc::now();
    h.codes
        .insert_at(VerificationCode::new("+14155550100", "111111"), now);
    h.codes
        .insert_at(VerificationCode::new("+14155550100", "222222"), now);

    // Identical timestamps: the most recently inserted row wins.
    h.service.verify_otp("+14155550100", "222222").await.unwrap();
}

#[tokio::test]
async fn verify_expired_code_is_rejected() {
    let h = harness();
    h.codes.insert_at(
        VerificationCode::new("+14155550100", "123456"),
        Utc::now() - Duration::minutes(6),
    );

    let err = h
        .service
        .verify_otp("+14155550100", "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CodeExpired));

    // A fresh code still verifies.
    h.service
        .send_otp("+14155550100", None, None, MessageType::Otp)
        .await
        .unwrap();
    let fresh = h
        .codes
        .find_latest_by_phone("+14155550100")
        .await
        .unwrap()
        .unwrap();
    h.service
        .verify_otp("+14155550100", &fresh.code)
        .await
        .unwrap();
}
