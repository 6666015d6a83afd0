pub mod settings;

use serde::{Deserialize, Serialize};

pub use settings::Settings;

/// Perfil mínimo do usuário autenticado, o suficiente para a barra de
/// navegação e para as decisões de exibição (admin ou não).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perfil {
    pub id: i32,
    pub nome: Option<String>,
    pub username: String,
    pub email: String,
    pub admin: bool,
}

impl Perfil {
    pub fn new(id: i32, username: String, email: String, admin: bool) -> Self {
        Self {
            id,
            nome: None,
            username,
            email,
            admin,
        }
    }

    /// Nome para exibição: nome completo quando cadastrado, senão o username.
    pub fn exibicao(&self) -> &str {
        match &self.nome {
            Some(nome) if !nome.trim().is_empty() => nome,
            _ => &self.username,
        }
    }
}

/// Snapshot da sessão gravado em localStorage. Lido uma vez no boot e
/// substituído assim que o perfil é buscado de novo no servidor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub perfil: Option<Perfil>,
}

impl StoredSession {
    pub fn new(token: String, perfil: Option<Perfil>) -> Self {
        Self { token, perfil }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exibicao_prefere_nome() {
        let mut perfil = Perfil::new(1, "maria".into(), "maria@acme.com.br".into(), false);
        assert_eq!(perfil.exibicao(), "maria");

        perfil.nome = Some("Maria Silva".into());
        assert_eq!(perfil.exibicao(), "Maria Silva");

        perfil.nome = Some("   ".into());
        assert_eq!(perfil.exibicao(), "maria");
    }

    #[test]
    fn test_stored_session_roundtrip() {
        let sessao = StoredSession::new(
            "token-abc".into(),
            Some(Perfil::new(7, "admin".into(), "admin@acme.com.br".into(), true)),
        );

        let json = serde_json::to_string(&sessao).unwrap();
        let relido: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(relido, sessao);
    }

    #[test]
    fn test_stored_session_sem_perfil() {
        let relido: StoredSession = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(relido.token, "abc");
        assert!(relido.perfil.is_none());
    }
}
