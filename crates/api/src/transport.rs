use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Request, RequestInit, RequestMode, Response,
    wasm_bindgen::{JsCast, JsValue},
};

/// Resposta HTTP crua, com o corpo já lido como texto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Falha ocorrida antes de qualquer resposta do servidor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub mensagem: String,
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self { mensagem: format!("{value:?}") }
    }
}

/// Canal HTTP usado pelo gateway. Em produção é o `fetch` do
/// navegador; nos testes, implementações de mentira gravam a chamada e
/// respondem sem rede.
#[async_trait(?Send)]
pub trait Transport {
    /// Envia um POST JSON. `autorizacao` é o valor completo do
    /// cabeçalho `Authorization`, quando houver sessão.
    async fn post_json(
        &self,
        url: &str,
        corpo: String,
        autorizacao: Option<&str>,
    ) -> Result<HttpReply, TransportError>;
}

/// `fetch` do navegador em modo CORS, já que a API roda em outra
/// origem durante o desenvolvimento.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(
        &self,
        url: &str,
        corpo: String,
        autorizacao: Option<&str>,
    ) -> Result<HttpReply, TransportError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&corpo));

        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("content-type", "application/json")?;
        if let Some(valor) = autorizacao {
            request.headers().set("authorization", valor)?;
        }

        let janela = web_sys::window().ok_or_else(|| TransportError {
            mensagem: "Ambiente sem `window`; o gateway só roda no navegador.".into(),
        })?;

        let resp_value = JsFuture::from(janela.fetch_with_request(&request))
            .await
            .map_err(|_| TransportError { mensagem: mensagem_de_queda(&janela, url) })?;
        let resp: Response = resp_value.dyn_into()?;

        let texto = JsFuture::from(resp.text()?).await?;
        Ok(HttpReply {
            status: resp.status(),
            body: texto.as_string().unwrap_or_default(),
        })
    }
}

/// O `fetch` rejeita sem detalhe tanto com o servidor fora do ar
/// quanto com resposta bloqueada por CORS; em chamada de outra origem
/// o aviso menciona as duas hipóteses.
fn mensagem_de_queda(janela: &web_sys::Window, url: &str) -> String {
    let origem = janela.location().origin().unwrap_or_default();
    if !origem.is_empty() && url.starts_with(&origem) {
        "Não foi possível conectar ao servidor. Verifique se o backend está no ar.".into()
    } else {
        "Não foi possível conectar ao servidor. Verifique se o backend está no ar \
         e se o CORS libera esta origem."
            .into()
    }
}
