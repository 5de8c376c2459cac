//! User-facing account logic: registration validation and role routing.
//!
//! Deliberately separate from the scheduling core - nothing in here touches
//! the registry or the navigator, and none of the calendar code depends on
//! roles or session state. The service holds no state of its own; tokens
//! and profile persistence live with the external auth provider.
use log::info;

use shared::{
    DashboardTarget, PasswordStrength, RegisterRequest, RegistrationError,
    RegistrationValidation, UserRole,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Service for validating account forms and computing role-based
/// navigation targets
#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a registration form.
    ///
    /// Mirrors the sign-up form rules: every failing field is reported, but
    /// at most one error per field so the form can show one message under
    /// each input.
    pub fn validate_registration(&self, request: &RegisterRequest) -> RegistrationValidation {
        let mut errors = Vec::new();

        if request.name.trim().is_empty() {
            errors.push(RegistrationError::EmptyName);
        }

        if request.email.trim().is_empty() {
            errors.push(RegistrationError::EmptyEmail);
        } else if !self.is_valid_email(request.email.trim()) {
            errors.push(RegistrationError::InvalidEmail);
        }

        if request.password.is_empty() {
            errors.push(RegistrationError::EmptyPassword);
        } else {
            let strength = self.password_strength(&request.password);
            if !strength.has_min_length {
                errors.push(RegistrationError::PasswordTooShort);
            } else if !strength.has_uppercase || !strength.has_lowercase {
                errors.push(RegistrationError::PasswordNeedsMixedCase);
            } else if !strength.has_number {
                errors.push(RegistrationError::PasswordNeedsNumber);
            }
        }

        if request.password != request.confirm_password {
            errors.push(RegistrationError::PasswordMismatch);
        }

        if !errors.is_empty() {
            info!(
                "👤 USER: Registration for {:?} failed validation with {} errors",
                request.email,
                errors.len()
            );
        }

        RegistrationValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Break a password down into the strength checks the form reports on.
    pub fn password_strength(&self, password: &str) -> PasswordStrength {
        PasswordStrength {
            has_min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Pragmatic email shape check: one `@`, a non-empty local part, and a
    /// dotted domain. The auth provider does the real verification.
    pub fn is_valid_email(&self, email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = email.splitn(2, '@');
        let local = parts.next().unwrap_or("");
        let domain = parts.next().unwrap_or("");
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }
        let (head, tail) = match domain.rsplit_once('.') {
            Some(split) => split,
            None => return false,
        };
        !head.is_empty() && !tail.is_empty()
    }

    /// Where a signed-in user lands after picking a role.
    pub fn dashboard_for_role(&self, role: &UserRole) -> DashboardTarget {
        match role {
            UserRole::BookingOfficer => DashboardTarget::BookingDashboard,
            UserRole::Producer => DashboardTarget::ProducerDashboard,
            UserRole::CameraOperator => DashboardTarget::OperatorDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request() -> RegisterRequest {
        RegisterRequest {
            name: "Dana Reyes".to_string(),
            email: "dana.reyes@example.com".to_string(),
            password: "Camera42go".to_string(),
            confirm_password: "Camera42go".to_string(),
            phone_number: "555-0142".to_string(),
            role: UserRole::CameraOperator,
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let service = UserService::new();
        let validation = service.validate_registration(&create_test_request());
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_empty_name_is_reported() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.name = "   ".to_string();

        let validation = service.validate_registration(&request);
        assert!(!validation.is_valid);
        assert!(validation.errors.contains(&RegistrationError::EmptyName));
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.email = "dana.example.com".to_string();

        let validation = service.validate_registration(&request);
        assert!(validation.errors.contains(&RegistrationError::InvalidEmail));
    }

    #[test]
    fn test_short_password_is_reported_first() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.password = "Ab1".to_string();
        request.confirm_password = "Ab1".to_string();

        let validation = service.validate_registration(&request);
        // Only the most specific password error is reported
        assert!(validation
            .errors
            .contains(&RegistrationError::PasswordTooShort));
        assert!(!validation
            .errors
            .contains(&RegistrationError::PasswordNeedsMixedCase));
    }

    #[test]
    fn test_password_needs_mixed_case() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.password = "lowercase1".to_string();
        request.confirm_password = "lowercase1".to_string();

        let validation = service.validate_registration(&request);
        assert!(validation
            .errors
            .contains(&RegistrationError::PasswordNeedsMixedCase));
    }

    #[test]
    fn test_password_needs_number() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.password = "NoNumbersHere".to_string();
        request.confirm_password = "NoNumbersHere".to_string();

        let validation = service.validate_registration(&request);
        assert!(validation
            .errors
            .contains(&RegistrationError::PasswordNeedsNumber));
    }

    #[test]
    fn test_password_mismatch_is_reported() {
        let service = UserService::new();
        let mut request = create_test_request();
        request.confirm_password = "Different42go".to_string();

        let validation = service.validate_registration(&request);
        assert!(validation
            .errors
            .contains(&RegistrationError::PasswordMismatch));
    }

    #[test]
    fn test_email_shape_check() {
        let service = UserService::new();

        assert!(service.is_valid_email("crew@station.tv"));
        assert!(service.is_valid_email("first.last@news.example.com"));

        assert!(!service.is_valid_email(""));
        assert!(!service.is_valid_email("no-at-sign.example.com"));
        assert!(!service.is_valid_email("@example.com"));
        assert!(!service.is_valid_email("crew@"));
        assert!(!service.is_valid_email("crew@nodot"));
        assert!(!service.is_valid_email("crew@domain."));
        assert!(!service.is_valid_email("crew name@example.com"));
    }

    #[test]
    fn test_password_strength_breakdown() {
        let service = UserService::new();

        let strong = service.password_strength("Camera42go");
        assert!(strong.has_min_length);
        assert!(strong.has_uppercase);
        assert!(strong.has_lowercase);
        assert!(strong.has_number);

        let weak = service.password_strength("short");
        assert!(!weak.has_min_length);
        assert!(!weak.has_uppercase);
        assert!(!weak.has_number);
    }

    #[test]
    fn test_dashboard_routing_per_role() {
        let service = UserService::new();

        assert_eq!(
            service.dashboard_for_role(&UserRole::BookingOfficer),
            DashboardTarget::BookingDashboard
        );
        assert_eq!(
            service.dashboard_for_role(&UserRole::Producer),
            DashboardTarget::ProducerDashboard
        );
        assert_eq!(
            service.dashboard_for_role(&UserRole::CameraOperator),
            DashboardTarget::OperatorDashboard
        );
    }
}
