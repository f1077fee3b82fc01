use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use shared_types::{
    AppError, ClientConfig, CreateUserRequest, CreatedUser, ErrorDetail, LoginForm,
    LoginResponse, NewTicket, RegisterForm, Session, Ticket, TicketSummary,
};

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const USERS_ENDPOINT: &str = "/api/v1/users/";
pub const TICKETS_ENDPOINT: &str = "/api/v1/tickets/";

/// HTTP client for the support desk backend.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TicketApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TicketApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client pointed at the bundled configuration.
    pub fn from_bundled_config() -> Self {
        Self::new(crate::config::client_config())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange credentials for a token via the OAuth2 password form.
    ///
    /// A rejected login carries the backend `detail` when present, otherwise
    /// "Login failed".
    #[tracing::instrument(skip(self, form), fields(email = %form.email.trim()))]
    pub async fn login(&self, form: &LoginForm) -> Result<LoginResponse, AppError> {
        form.check()?;
        let response = self
            .http
            .post(self.config.endpoint(LOGIN_ENDPOINT))
            .form(&form.as_form_fields()[..])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = auth_failure(response, "Login failed").await;
            tracing::warn!(error = %err, "login rejected");
            return Err(err);
        }

        let login: LoginResponse = response.json().await.map_err(transport_error)?;
        tracing::info!(role = %login.role, "login succeeded");
        Ok(login)
    }

    /// Create an account. The new user is not signed in.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &CreateUserRequest) -> Result<CreatedUser, AppError> {
        let response = self
            .http
            .post(self.config.endpoint(USERS_ENDPOINT))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = auth_failure(response, "Registration failed").await;
            tracing::warn!(error = %err, "registration rejected");
            return Err(err);
        }

        let user: CreatedUser = response.json().await.map_err(transport_error)?;
        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Validate the sign-up form, create the account, then sign in with the
    /// same credentials.
    pub async fn register_and_login(&self, form: &RegisterForm) -> Result<LoginResponse, AppError> {
        form.check()?;
        self.register(&form.to_request()).await?;
        self.login(&form.to_login()).await
    }

    #[tracing::instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_tickets(&self, session: &Session) -> Result<Vec<TicketSummary>, AppError> {
        let request = self
            .http
            .get(self.config.endpoint(TICKETS_ENDPOINT))
            .bearer_auth(&session.token);
        let tickets: Vec<TicketSummary> = send_json(request).await?;
        tracing::debug!(count = tickets.len(), "tickets loaded");
        Ok(tickets)
    }

    #[tracing::instrument(skip(self, session))]
    pub async fn get_ticket(&self, session: &Session, id: i64) -> Result<Ticket, AppError> {
        let request = self
            .http
            .get(self.config.endpoint(&format!("{TICKETS_ENDPOINT}{id}")))
            .bearer_auth(&session.token);
        send_json(request).await
    }

    #[tracing::instrument(skip(self, session, ticket), fields(sujet = %ticket.sujet))]
    pub async fn create_ticket(
        &self,
        session: &Session,
        ticket: &NewTicket,
    ) -> Result<Ticket, AppError> {
        let request = self
            .http
            .post(self.config.endpoint(TICKETS_ENDPOINT))
            .bearer_auth(&session.token)
            .json(ticket);
        let created: Ticket = send_json(request).await?;
        tracing::info!(ticket_id = created.id, "ticket created");
        Ok(created)
    }
}

async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, AppError> {
    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = AppError::from_response_body(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "request failed");
        return Err(err);
    }
    response.json().await.map_err(transport_error)
}

/// Login and sign-up show the backend's `detail` verbatim, whatever the
/// status, falling back to `fallback`.
async fn auth_failure(response: Response, fallback: &str) -> AppError {
    let status = response.status();
    let detail = response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|d| d.message())
        .unwrap_or_else(|| fallback.to_string());
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        AppError::validation(detail, Default::default())
    } else if status.is_server_error() {
        AppError::internal(detail)
    } else {
        AppError::bad_request(detail)
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_decode() {
        AppError::decode(format!("Unexpected response: {e}"))
    } else {
        AppError::network(e.to_string())
    }
}
