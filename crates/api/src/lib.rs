pub mod auth;
pub mod error;
pub mod participantes;
pub mod reservas;
pub mod salas;
pub mod transport;
pub mod usuarios;

pub use error::ApiError;
pub use transport::{FetchTransport, HttpReply, Transport, TransportError};

use std::rc::Rc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::error;

/// Mensagem exibida no lugar do texto cru do backend quando criar ou
/// atualizar reserva esbarra em choque de agenda.
pub const MENSAGEM_CONFLITO: &str =
    "Conflito de horário: Já existe uma reserva neste período para esta sala.";

/// Ponto único de acesso ao GraphQL: monta o corpo `{query, variables}`,
/// anexa o bearer quando há sessão e converte qualquer falha em
/// [`ApiError`].
#[derive(Clone)]
pub struct Gateway {
    endpoint: String,
    bearer: Option<String>,
    transport: Rc<dyn Transport>,
}

impl Gateway {
    pub fn new(endpoint: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), bearer: None, transport }
    }

    /// Versão autenticada do gateway; sem token nenhum cabeçalho
    /// `Authorization` é enviado.
    pub fn com_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executa uma operação e extrai `data.<operacao>` já tipado.
    pub(crate) async fn executa<T: DeserializeOwned>(
        &self,
        operacao: &str,
        documento: &str,
        variaveis: Value,
    ) -> Result<T, ApiError> {
        let corpo = json!({ "query": documento, "variables": variaveis }).to_string();
        let autorizacao = self.bearer.as_ref().map(|token| format!("Bearer {token}"));

        let reply = self
            .transport
            .post_json(&self.endpoint, corpo, autorizacao.as_deref())
            .await
            .map_err(|falha| {
                error!("{operacao}: {}", falha.mensagem);
                ApiError::Network(falha.mensagem)
            })?;

        decodifica(operacao, &reply)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErroGraphql>,
}

#[derive(Deserialize)]
struct ErroGraphql {
    message: String,
}

/// Decodifica o envelope `{data, errors}` e classifica a falha uma
/// única vez, aqui na borda.
fn decodifica<T: DeserializeOwned>(operacao: &str, reply: &HttpReply) -> Result<T, ApiError> {
    let envelope: Envelope = match serde_json::from_str(&reply.body) {
        Ok(envelope) => envelope,
        Err(_) if reply.status == 401 || reply.status == 403 => {
            return Err(ApiError::Authorization(
                "Sessão expirada. Faça login novamente.".into(),
            ));
        }
        Err(_) => {
            error!("{operacao}: resposta ilegível (HTTP {})", reply.status);
            return Err(ApiError::Unknown(format!(
                "Resposta inesperada do servidor (HTTP {}).",
                reply.status
            )));
        }
    };

    if let Some(erro) = envelope.errors.first() {
        return Err(classifica(reply.status, &erro.message));
    }

    let data = envelope.data.unwrap_or(Value::Null);
    let campo = match &data {
        Value::Object(plano) => plano.get(operacao).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    };

    serde_json::from_value(campo).map_err(|erro| {
        error!("{operacao}: corpo fora do contrato: {erro}");
        ApiError::Unknown("Resposta inesperada do servidor.".into())
    })
}

/// O primeiro erro estruturado vira Authorization, Conflict ou
/// Validation, preservando o texto original do backend.
fn classifica(status: u16, mensagem: &str) -> ApiError {
    let chave = mensagem.to_lowercase();

    if status == 401
        || status == 403
        || chave.contains("autentica")
        || chave.contains("autoriza")
        || chave.contains("credencia")
        || chave.contains("permiss")
        || chave.contains("not authenticated")
        || chave.contains("unauthorized")
    {
        return ApiError::Authorization(mensagem.to_string());
    }

    if chave.contains("conflito")
        || chave.contains("conflict")
        || chave.contains("já existe")
        || chave.contains("already exists")
    {
        return ApiError::Conflict(mensagem.to_string());
    }

    ApiError::Validation(mensagem.to_string())
}

/// Reescrita aplicada somente por criar/atualizar reserva; nas demais
/// operações a mensagem de conflito segue crua.
pub(crate) fn reescreve_conflito(erro: ApiError) -> ApiError {
    match erro {
        ApiError::Conflict(_) => ApiError::Conflict(MENSAGEM_CONFLITO.to_string()),
        outro => outro,
    }
}
