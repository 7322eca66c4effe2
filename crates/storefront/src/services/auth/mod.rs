//! OTP login.
//!
//! There is no SMS gateway. [`SimulatedAuthService`] waits a fixed delay and
//! reports success, standing in for the network round trip. [`LoginFlow`]
//! drives the two-step phone/OTP form on top of any [`AuthService`] and
//! updates the [`Store`] session once the code is accepted.

mod error;

use std::future::Future;
use std::time::Duration;

use tracing::{info, instrument};

use shiba_core::{OtpCode, PhoneNumber};

use crate::models::User;
use crate::store::Store;

pub use error::AuthError;

/// Sends and verifies one-time passwords.
pub trait AuthService: Send + Sync {
    /// Send an OTP to `phone`.
    fn send_code(&self, phone: &PhoneNumber)
    -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Check `code` for `phone`.
    fn verify_code(
        &self,
        phone: &PhoneNumber,
        code: &OtpCode,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Send a fresh OTP to `phone`.
    fn resend_code(&self, phone: &PhoneNumber)
    -> impl Future<Output = Result<(), AuthError>> + Send {
        self.send_code(phone)
    }
}

/// OTP service that always succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    delay: Duration,
}

impl SimulatedAuthService {
    /// Delay used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    /// Create a service that answers after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The simulated round-trip time.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl AuthService for SimulatedAuthService {
    #[instrument(skip(self), fields(delay_ms = %self.delay.as_millis()))]
    async fn send_code(&self, phone: &PhoneNumber) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        info!("OTP sent");
        Ok(())
    }

    #[instrument(skip(self, _code), fields(delay_ms = %self.delay.as_millis()))]
    async fn verify_code(&self, phone: &PhoneNumber, _code: &OtpCode) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        info!("OTP verified");
        Ok(())
    }
}

/// Where the login form currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    /// Waiting for a phone number.
    EnterPhone,
    /// A code was sent to `phone`; waiting for it.
    EnterOtp {
        /// Number the code was sent to.
        phone: PhoneNumber,
    },
}

/// Two-step OTP login bound to a store.
pub struct LoginFlow<A> {
    store: Store,
    auth: A,
    step: LoginStep,
}

impl<A: AuthService> LoginFlow<A> {
    /// Start at the phone step.
    #[must_use]
    pub fn new(store: Store, auth: A) -> Self {
        Self {
            store,
            auth,
            step: LoginStep::EnterPhone,
        }
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> &LoginStep {
        &self.step
    }

    /// Validate `raw_phone`, send a code, and move to the OTP step.
    ///
    /// Non-digits are stripped first, as the phone field does while typing.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidPhone`] unless exactly 10 digits remain,
    /// or whatever the service reports.
    pub async fn send_otp(&mut self, raw_phone: &str) -> Result<(), AuthError> {
        let phone = PhoneNumber::from_input(raw_phone).map_err(AuthError::InvalidPhone)?;
        self.auth.send_code(&phone).await?;
        self.step = LoginStep::EnterOtp { phone };
        Ok(())
    }

    /// Send another code to the number already entered.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CodeNotSent`] if no number has been entered yet.
    pub async fn resend_otp(&self) -> Result<(), AuthError> {
        let LoginStep::EnterOtp { phone } = &self.step else {
            return Err(AuthError::CodeNotSent);
        };
        self.auth.resend_code(phone).await
    }

    /// Go back to the phone step.
    pub fn change_phone(&mut self) {
        self.step = LoginStep::EnterPhone;
    }

    /// Validate `raw_otp`, verify it, and log the shopper in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CodeNotSent`] outside the OTP step,
    /// [`AuthError::InvalidOtp`] unless `raw_otp` holds exactly 6 digits once
    /// non-digits are stripped, or whatever the service reports.
    pub async fn verify_otp(&mut self, raw_otp: &str) -> Result<User, AuthError> {
        let LoginStep::EnterOtp { phone } = &self.step else {
            return Err(AuthError::CodeNotSent);
        };
        let code = OtpCode::from_input(raw_otp).map_err(AuthError::InvalidOtp)?;

        self.auth.verify_code(phone, &code).await?;

        self.store.login(phone.clone());
        self.step = LoginStep::EnterPhone;
        Ok(self.store.user())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use shiba_core::{DigitCodeError, ProductId};

    use super::*;

    /// Records calls and rejects every code.
    #[derive(Default)]
    struct RejectingAuth {
        sent: Mutex<Vec<String>>,
    }

    impl AuthService for RejectingAuth {
        async fn send_code(&self, phone: &PhoneNumber) -> Result<(), AuthError> {
            self.sent.lock().unwrap().push(phone.to_string());
            Ok(())
        }

        async fn verify_code(&self, _phone: &PhoneNumber, _code: &OtpCode) -> Result<(), AuthError> {
            Err(AuthError::VerificationFailed)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_service_waits_for_delay() {
        let service = SimulatedAuthService::new(Duration::from_millis(1500));
        let phone = PhoneNumber::parse("9876543210").unwrap();

        let start = tokio::time::Instant::now();
        service.send_code(&phone).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_sets_session() {
        let store = Store::new();
        let mut flow = LoginFlow::new(store.clone(), SimulatedAuthService::default());

        flow.send_otp("98765 43210").await.unwrap();
        assert!(matches!(flow.step(), LoginStep::EnterOtp { .. }));

        let user = flow.verify_otp("123456").await.unwrap();
        assert!(user.is_logged_in);
        assert_eq!(user.phone.unwrap().as_str(), "9876543210");
        assert!(store.user().is_logged_in);
        assert_eq!(flow.step(), &LoginStep::EnterPhone);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_phone_is_rejected_without_calling_service() {
        let mut flow = LoginFlow::new(Store::new(), RejectingAuth::default());
        let err = flow.send_otp("12345").await.unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidPhone(DigitCodeError::WrongLength {
                expected: 10,
                actual: 5
            })
        );
        assert!(err.is_validation());
        assert!(flow.auth.sent.lock().unwrap().is_empty());
        assert_eq!(flow.step(), &LoginStep::EnterPhone);
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_before_send() {
        let mut flow = LoginFlow::new(Store::new(), SimulatedAuthService::default());
        assert_eq!(
            flow.verify_otp("123456").await.unwrap_err(),
            AuthError::CodeNotSent
        );
        assert_eq!(flow.resend_otp().await.unwrap_err(), AuthError::CodeNotSent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_otp_keeps_otp_step() {
        let store = Store::new();
        let mut flow = LoginFlow::new(store.clone(), SimulatedAuthService::default());
        flow.send_otp("9876543210").await.unwrap();

        let err = flow.verify_otp("12ab56").await.unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidOtp(DigitCodeError::WrongLength {
                expected: 6,
                actual: 4
            })
        );
        assert!(matches!(flow.step(), LoginStep::EnterOtp { .. }));
        assert!(!store.user().is_logged_in);
    }

    #[tokio::test(start_paused = true)]
    async fn test_otp_separators_are_stripped() {
        let store = Store::new();
        let mut flow = LoginFlow::new(store.clone(), SimulatedAuthService::default());
        flow.send_otp("9876543210").await.unwrap();

        let user = flow.verify_otp("123 456").await.unwrap();
        assert!(user.is_logged_in);
        assert!(store.user().is_logged_in);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_code_leaves_session_logged_out() {
        let store = Store::new();
        let mut flow = LoginFlow::new(store.clone(), RejectingAuth::default());
        flow.send_otp("9876543210").await.unwrap();

        let err = flow.verify_otp("123456").await.unwrap_err();
        assert_eq!(err, AuthError::VerificationFailed);
        assert!(!store.user().is_logged_in);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resend_and_change_phone() {
        let mut flow = LoginFlow::new(Store::new(), RejectingAuth::default());
        flow.send_otp("9876543210").await.unwrap();
        flow.resend_otp().await.unwrap();
        assert_eq!(flow.auth.sent.lock().unwrap().len(), 2);

        flow.change_phone();
        assert_eq!(flow.step(), &LoginStep::EnterPhone);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_does_not_touch_cart() {
        let store = Store::new();
        store
            .add_product_to_cart(ProductId::new(1), None, None)
            .unwrap();
        let mut flow = LoginFlow::new(store.clone(), SimulatedAuthService::default());
        flow.send_otp("9876543210").await.unwrap();
        flow.verify_otp("000000").await.unwrap();
        assert_eq!(store.cart_count(), 1);
    }
}
