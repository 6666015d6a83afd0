use thiserror::Error;

/// Classificação única produzida na borda do gateway. As telas
/// consomem qualquer falha de rede ou do backend por este tipo, sem
/// inspecionar formato de resposta.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// O servidor nem respondeu: endereço fora do ar, DNS ou CORS.
    #[error("{0}")]
    Network(String),

    /// Erro estruturado do backend que não é autorização nem conflito.
    #[error("{0}")]
    Validation(String),

    /// HTTP 401/403 ou erro estruturado de credencial/permissão.
    #[error("{0}")]
    Authorization(String),

    /// Duplicidade ou choque de agenda detectado pelo backend.
    #[error("{0}")]
    Conflict(String),

    /// Resposta fora do contrato esperado.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Texto voltado ao usuário, independente da variante.
    pub fn mensagem(&self) -> &str {
        match self {
            ApiError::Network(mensagem)
            | ApiError::Validation(mensagem)
            | ApiError::Authorization(mensagem)
            | ApiError::Conflict(mensagem)
            | ApiError::Unknown(mensagem) => mensagem,
        }
    }

    pub fn eh_autorizacao(&self) -> bool {
        matches!(self, ApiError::Authorization(_))
    }

    pub fn eh_conflito(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}
