use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::messages::{translate, MessageKey};
use crate::middleware::i18n::Locale;

// O único erro de domínio é a falha de busca no banco externo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Falha ao buscar dados: {0}")]
    FetchFailure(#[from] sqlx::Error),

    #[error("Soma das vendas do dia excede o limite numérico")]
    SalesOverflow,

    #[error("Configuração inválida: {0}")]
    Config(String),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub details: Option<String>,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        match self {
            AppError::FetchFailure(e) => {
                tracing::error!("Falha ao buscar dados do banco: {}", e);
                ApiError {
                    status: StatusCode::BAD_GATEWAY,
                    message: translate(MessageKey::FetchFailed, &locale.0),
                    details: Some(e.to_string()),
                }
            }
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: translate(MessageKey::Unexpected, &locale.0),
                    details: None,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_maps_to_bad_gateway_with_details() {
        let err = AppError::FetchFailure(sqlx::Error::PoolTimedOut);
        let api = err.to_api_error(&Locale("en".into()));
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api.message, translate(MessageKey::FetchFailed, "en"));
        assert!(api.details.is_some());
    }

    #[test]
    fn config_error_is_opaque_to_the_client() {
        let err = AppError::Config("BIND_ADDR".into());
        let api = err.to_api_error(&Locale("th".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, translate(MessageKey::Unexpected, "th"));
        assert!(api.details.is_none());
    }
}
