#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, Gateway, HttpReply, MENSAGEM_CONFLITO, Transport, TransportError};
use async_trait::async_trait;
use chrono::NaiveDate;
use data::usuario::{Credenciais, UsuarioInput};
use futures::executor::block_on;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Chamada {
    url: String,
    corpo: String,
    autorizacao: Option<String>,
}

/// Transporte de mentira: grava cada chamada e devolve sempre a mesma
/// resposta.
struct TransporteFixo {
    status: u16,
    body: String,
    chamadas: RefCell<Vec<Chamada>>,
}

impl TransporteFixo {
    fn new(status: u16, body: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { status, body: body.into(), chamadas: RefCell::new(Vec::new()) })
    }

    fn unica_chamada(&self) -> Chamada {
        let chamadas = self.chamadas.borrow();
        assert_eq!(chamadas.len(), 1, "Expected exactly one network call");
        chamadas[0].clone()
    }
}

#[async_trait(?Send)]
impl Transport for TransporteFixo {
    async fn post_json(
        &self,
        url: &str,
        corpo: String,
        autorizacao: Option<&str>,
    ) -> Result<HttpReply, TransportError> {
        self.chamadas.borrow_mut().push(Chamada {
            url: url.to_string(),
            corpo,
            autorizacao: autorizacao.map(str::to_string),
        });
        Ok(HttpReply { status: self.status, body: self.body.clone() })
    }
}

/// Transporte que nunca alcança o servidor.
struct TransporteQueCai;

#[async_trait(?Send)]
impl Transport for TransporteQueCai {
    async fn post_json(
        &self,
        _url: &str,
        _corpo: String,
        _autorizacao: Option<&str>,
    ) -> Result<HttpReply, TransportError> {
        Err(TransportError {
            mensagem: "Não foi possível conectar ao servidor. Verifique se o backend está no ar."
                .into(),
        })
    }
}

fn corpo_json(chamada: &Chamada) -> Value {
    serde_json::from_str(&chamada.corpo).unwrap()
}

#[test]
fn test_login_decodifica_token_e_nao_envia_bearer() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":{"login":{"accessToken":"tok-123","tokenType":"bearer"}}}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte.clone());

    let credenciais =
        Credenciais { username: "maria".into(), password: "segredo".into() };
    let resposta = block_on(gateway.login(&credenciais)).unwrap();

    assert_eq!(resposta.access_token, "tok-123");
    assert_eq!(resposta.token_type, "bearer");

    let chamada = transporte.unica_chamada();
    assert_eq!(chamada.url, "http://localhost:8000/graphql");
    assert_eq!(chamada.autorizacao, None);

    let corpo = corpo_json(&chamada);
    assert_eq!(corpo["variables"]["loginData"]["username"], "maria");
    assert!(corpo["query"].as_str().unwrap().contains("login(loginData: $loginData)"));
}

#[test]
fn test_bearer_anexado_quando_ha_token() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":{"meuPerfil":{"id":1,"nome":null,"username":"maria","email":"m@x.com","admin":false,"createdAt":null}}}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte.clone())
        .com_bearer(Some("tok-123".into()));

    let perfil = block_on(gateway.meu_perfil()).unwrap();
    assert_eq!(perfil.username, "maria");

    let chamada = transporte.unica_chamada();
    assert_eq!(chamada.autorizacao.as_deref(), Some("Bearer tok-123"));
}

#[test]
fn test_erro_estruturado_vira_validation_com_texto_cru() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":null,"errors":[{"message":"Capacidade deve ser maior que zero"}]}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let erro = block_on(gateway.sala(7)).unwrap_err();
    match erro {
        ApiError::Validation(mensagem) => {
            assert_eq!(mensagem, "Capacidade deve ser maior que zero");
        }
        outro => panic!("Expected Validation, got {outro:?}"),
    }
}

#[test]
fn test_http_401_sem_corpo_legivel_vira_authorization() {
    let transporte = TransporteFixo::new(401, "Unauthorized");
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let erro = block_on(gateway.meu_perfil()).unwrap_err();
    assert!(erro.eh_autorizacao(), "Expected Authorization, got {erro:?}");
}

#[test]
fn test_erro_de_credencial_vira_authorization() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":null,"errors":[{"message":"Não autenticado"}]}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let erro = block_on(gateway.contar_reservas_nao_vistas()).unwrap_err();
    assert!(erro.eh_autorizacao(), "Expected Authorization, got {erro:?}");
}

#[test]
fn test_conflito_em_criar_reserva_reescreve_mensagem() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":null,"errors":[{"message":"Já existe uma reserva para esta sala neste período"}]}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let entrada = data::reserva::ReservaInput {
        sala_id: 3,
        data_hora_inicio: data::datetime::parse_flexivel("2025-03-10T14:00:00").unwrap(),
        data_hora_fim: data::datetime::parse_flexivel("2025-03-10T15:00:00").unwrap(),
        cafe_quantidade: None,
        cafe_descricao: None,
        link_meet: None,
    };
    let erro = block_on(gateway.criar_reserva(&entrada)).unwrap_err();

    match erro {
        ApiError::Conflict(mensagem) => assert_eq!(mensagem, MENSAGEM_CONFLITO),
        outro => panic!("Expected Conflict, got {outro:?}"),
    }
}

#[test]
fn test_conflito_fora_de_reserva_mantem_texto_cru() {
    let transporte = TransporteFixo::new(
        200,
        r#"{"data":null,"errors":[{"message":"Username já existe"}]}"#,
    );
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let entrada = UsuarioInput {
        nome: None,
        username: "maria".into(),
        email: "m@x.com".into(),
        password: "segredo1".into(),
        admin: None,
    };
    let erro = block_on(gateway.criar_usuario(&entrada)).unwrap_err();

    match erro {
        ApiError::Conflict(mensagem) => assert_eq!(mensagem, "Username já existe"),
        outro => panic!("Expected Conflict, got {outro:?}"),
    }
}

#[test]
fn test_corpo_ilegivel_vira_unknown() {
    let transporte = TransporteFixo::new(500, "<html>stack trace</html>");
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let erro = block_on(gateway.salas(0, 1000, None)).unwrap_err();
    match erro {
        ApiError::Unknown(mensagem) => assert!(mensagem.contains("HTTP 500")),
        outro => panic!("Expected Unknown, got {outro:?}"),
    }
}

#[test]
fn test_queda_de_transporte_vira_network() {
    let gateway = Gateway::new("http://localhost:8000/graphql", Rc::new(TransporteQueCai));

    let erro = block_on(gateway.reservas(0, 1000)).unwrap_err();
    match erro {
        ApiError::Network(mensagem) => assert!(mensagem.contains("conectar")),
        outro => panic!("Expected Network, got {outro:?}"),
    }
}

#[test]
fn test_deletar_sala_extrai_booleano() {
    let transporte = TransporteFixo::new(200, r#"{"data":{"deletarSala":true}}"#);
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte.clone());

    let apagou = block_on(gateway.deletar_sala(7)).unwrap();
    assert!(apagou);

    let corpo = corpo_json(&transporte.unica_chamada());
    assert_eq!(corpo["variables"]["salaId"], 7);
}

#[test]
fn test_historico_envia_flags_de_recorte() {
    let transporte = TransporteFixo::new(200, r#"{"data":{"meuHistorico":[]}}"#);
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte.clone());

    let itens = block_on(gateway.meu_historico(true, false, 0, 1000)).unwrap();
    assert!(itens.is_empty());

    let corpo = corpo_json(&transporte.unica_chamada());
    assert_eq!(corpo["variables"]["apenasFuturas"], json!(true));
    assert_eq!(corpo["variables"]["apenasPassadas"], json!(false));
    assert_eq!(corpo["variables"]["limit"], 1000);
}

#[test]
fn test_horarios_ocupados_poe_argumentos_no_documento() {
    let transporte =
        TransporteFixo::new(200, r#"{"data":{"horariosOcupados":["09:00","14:00"]}}"#);
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte.clone());

    let data = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let ocupados = block_on(gateway.horarios_ocupados(3, data)).unwrap();
    assert_eq!(ocupados, vec!["09:00", "14:00"]);

    let corpo = corpo_json(&transporte.unica_chamada());
    let consulta = corpo["query"].as_str().unwrap();
    assert!(consulta.contains("salaId: 3"));
    assert!(consulta.contains("data: \"2025-03-10\""));
}

#[test]
fn test_reserva_completa_decodifica_relacoes() {
    let corpo = r#"{"data":{"reserva":{
        "id":9,
        "local":null,
        "sala":null,
        "salaId":3,
        "salaRel":{"id":3,"nome":"Aquário","local":"2º andar","capacidade":8,"descricao":null,"criadorId":1,"ativa":true},
        "dataHoraInicio":"2025-03-10T14:00:00",
        "dataHoraFim":"2025-03-10T15:00:00",
        "responsavelId":1,
        "responsavel":{"id":1,"nome":"Maria","username":"maria","email":"m@x.com","admin":false,"createdAt":null},
        "cafeQuantidade":10,
        "cafeDescricao":"Café e biscoitos",
        "linkMeet":null,
        "createdAt":"2025-03-01T08:00:00",
        "updatedAt":null
    }}}"#;
    let transporte = TransporteFixo::new(200, corpo);
    let gateway = Gateway::new("http://localhost:8000/graphql", transporte);

    let reserva = block_on(gateway.reserva(9)).unwrap();
    assert_eq!(reserva.sala_rel.as_ref().map(|sala| sala.nome.as_str()), Some("Aquário"));
    assert_eq!(reserva.nome_responsavel(), "Maria");
    assert_eq!(reserva.cafe_quantidade, Some(10));
}
