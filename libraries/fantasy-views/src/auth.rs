//! Login and registration forms

use crate::error::{Result, ViewError};
use crate::form::Validator;
use fantasy_client::{auth_error_response, AuthService, ClientError};
use fantasy_core::{LoginRequest, RegisterRequest, Route, User};
use std::sync::Arc;

/// Where a freshly signed-in user lands: an explicit return route wins,
/// otherwise admins go to their dashboard.
pub fn landing_route(user: &User, return_to: Option<Route>) -> Route {
    return_to.unwrap_or(if user.is_admin() {
        Route::AdminDashboard
    } else {
        Route::Dashboard
    })
}

/// Banner text and violation list shown under an auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFeedback {
    pub message: Option<String>,
    pub violations: Vec<String>,
}

impl AuthFeedback {
    fn from_error(error: &ClientError, fallback: &str) -> Self {
        let response = auth_error_response(error);
        let message = if response.message.is_empty() {
            fallback.to_string()
        } else {
            response.message
        };
        Self {
            message: Some(message),
            violations: response.violations,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username_or_email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required("usernameOrEmail", &self.username_or_email)
            .required("password", &self.password)
            .finish()
    }
}

pub struct LoginView {
    auth: Arc<AuthService>,
    pub form: LoginForm,
    /// Route the guard bounced the user from, if any
    pub return_to: Option<Route>,
    loading: bool,
    feedback: AuthFeedback,
}

impl LoginView {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            form: LoginForm::default(),
            return_to: None,
            loading: false,
            feedback: AuthFeedback::default(),
        }
    }

    /// Sign in and return the route to navigate to.
    pub async fn submit(&mut self) -> Result<Route> {
        self.form.validate()?;

        self.loading = true;
        self.feedback = AuthFeedback::default();
        let request = LoginRequest {
            username_or_email: self.form.username_or_email.trim().to_string(),
            password: self.form.password.clone(),
        };
        let result = self.auth.login(request).await;
        self.loading = false;

        match result {
            Ok(response) => Ok(landing_route(&response.user, self.return_to)),
            Err(e) => {
                self.feedback = AuthFeedback::from_error(&e, "Login failed. Please try again.");
                let message = self.feedback.message.clone().unwrap_or_default();
                Err(ViewError::request(message, e))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn feedback(&self) -> &AuthFeedback {
        &self.feedback
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<()> {
        Validator::new()
            .required("username", &self.username)
            .min_length("username", &self.username, 3)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("password", &self.password)
            .min_length("password", &self.password, 6)
            .required("confirmPassword", &self.confirm_password)
            .matches("confirmPassword", &self.confirm_password, "password", &self.password)
            .finish()
    }
}

pub struct RegisterView {
    auth: Arc<AuthService>,
    pub form: RegisterForm,
    loading: bool,
    feedback: AuthFeedback,
}

impl RegisterView {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            form: RegisterForm::default(),
            loading: false,
            feedback: AuthFeedback::default(),
        }
    }

    /// Create the account; the new user is signed in straight away.
    pub async fn submit(&mut self) -> Result<Route> {
        self.form.validate()?;

        self.loading = true;
        self.feedback = AuthFeedback::default();
        let request = RegisterRequest {
            username: self.form.username.trim().to_string(),
            email: self.form.email.trim().to_string(),
            password: self.form.password.clone(),
            confirm_password: self.form.confirm_password.clone(),
        };
        let result = self.auth.register(request).await;
        self.loading = false;

        match result {
            Ok(response) => Ok(landing_route(&response.user, None)),
            Err(e) => {
                self.feedback =
                    AuthFeedback::from_error(&e, "Registration failed. Please try again.");
                let message = self.feedback.message.clone().unwrap_or_default();
                Err(ViewError::request(message, e))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn feedback(&self) -> &AuthFeedback {
        &self.feedback
    }
}
