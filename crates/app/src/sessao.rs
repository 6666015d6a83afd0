use std::rc::Rc;

use api::{FetchTransport, Gateway};
use common::{Perfil, Settings, StoredSession};
use data::usuario::Usuario;
use leptos::prelude::*;
use tracing::{debug, warn};

/// Chave do snapshot de sessão no localStorage.
const CHAVE_SESSAO: &str = "auth-storage";

/// Estado de autenticação compartilhado por contexto. Carrega apenas
/// dados `Send + Sync`; o gateway, que não é, sai pronto de [`Sessao::gateway`]
/// a cada uso.
#[derive(Clone, Copy)]
pub struct Sessao {
    settings: StoredValue<Settings>,
    token: RwSignal<Option<String>>,
    perfil: RwSignal<Option<Perfil>>,
}

impl Sessao {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: StoredValue::new(settings),
            token: RwSignal::new(None),
            perfil: RwSignal::new(None),
        }
    }

    /// Rehidrata o snapshot persistido. O perfil gravado vale como
    /// palpite até a busca de perfil do bootstrap responder.
    pub fn carrega(&self) {
        let Some(texto) = ler_storage(CHAVE_SESSAO) else {
            return;
        };
        match serde_json::from_str::<StoredSession>(&texto) {
            Ok(snapshot) => {
                debug!("sessão restaurada do localStorage");
                self.token.set(Some(snapshot.token));
                self.perfil.set(snapshot.perfil);
            }
            Err(erro) => {
                warn!("snapshot de sessão ilegível, descartando: {erro}");
                remover_storage(CHAVE_SESSAO);
            }
        }
    }

    fn persiste(&self) {
        let Some(token) = self.token.get_untracked() else {
            return;
        };
        let snapshot = StoredSession::new(token, self.perfil.get_untracked());
        match serde_json::to_string(&snapshot) {
            Ok(texto) => gravar_storage(CHAVE_SESSAO, &texto),
            Err(erro) => warn!("falha ao serializar sessão: {erro}"),
        }
    }

    pub fn entrar(&self, token: String) {
        self.token.set(Some(token));
        self.persiste();
    }

    pub fn define_perfil(&self, perfil: Perfil) {
        self.perfil.set(Some(perfil));
        self.persiste();
    }

    pub fn sair(&self) {
        self.token.set(None);
        self.perfil.set(None);
        remover_storage(CHAVE_SESSAO);
    }

    pub fn autenticado(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    /// Decisões de exibição de administrador saem sempre daqui, do
    /// perfil em cache, nunca de consultas avulsas.
    pub fn eh_admin(&self) -> bool {
        self.perfil
            .with(|perfil| perfil.as_ref().is_some_and(|p| p.admin))
    }

    pub fn perfil(&self) -> Option<Perfil> {
        self.perfil.get()
    }

    pub fn settings(&self) -> Settings {
        self.settings.get_value()
    }

    pub fn gateway(&self) -> Gateway {
        let endpoint = self.settings.with_value(|s| s.graphql_url.clone());
        Gateway::new(endpoint, Rc::new(FetchTransport)).com_bearer(self.token.get_untracked())
    }
}

/// Perfil de navegação extraído da resposta de `meuPerfil`.
pub fn perfil_do_usuario(usuario: &Usuario) -> Perfil {
    Perfil {
        id: usuario.id,
        nome: usuario.nome.clone(),
        username: usuario.username.clone(),
        email: usuario.email.clone(),
        admin: usuario.admin,
    }
}

pub fn usa_sessao() -> Sessao {
    expect_context::<Sessao>()
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn ler_storage(chave: &str) -> Option<String> {
    storage()?.get_item(chave).ok().flatten()
}

fn gravar_storage(chave: &str, valor: &str) {
    match storage() {
        Some(storage) if storage.set_item(chave, valor).is_ok() => {}
        _ => warn!("localStorage indisponível, sessão não persistida"),
    }
}

fn remover_storage(chave: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(chave);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfil_do_usuario_copia_os_campos() {
        let usuario = Usuario {
            id: 9,
            nome: Some("Ana Souza".into()),
            username: "ana".into(),
            email: "ana@acme.com.br".into(),
            admin: true,
            created_at: None,
        };

        let perfil = perfil_do_usuario(&usuario);
        assert_eq!(perfil.id, 9);
        assert_eq!(perfil.exibicao(), "Ana Souza");
        assert!(perfil.admin);
    }
}
