use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i32,
    #[serde(default)]
    pub nome: Option<String>,
    pub username: String,
    pub email: String,
    pub admin: bool,
    #[serde(default, with = "datetime::iso_opt")]
    pub created_at: Option<NaiveDateTime>,
}

impl Usuario {
    /// Nome para exibição nas tabelas e no histórico.
    pub fn exibicao(&self) -> &str {
        match &self.nome {
            Some(nome) if !nome.trim().is_empty() => nome,
            _ => &self.username,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credenciais {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResposta {
    pub access_token: String,
    pub token_type: String,
}

/// Corpo de criação de usuário; `admin` só é enviado pelas telas de
/// administração.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

/// Patch parcial usado tanto em "meu perfil" quanto na administração.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroAdmin {
    #[default]
    Todos,
    Sim,
    Nao,
}

impl FiltroAdmin {
    pub fn aceita(&self, admin: bool) -> bool {
        match self {
            FiltroAdmin::Todos => true,
            FiltroAdmin::Sim => admin,
            FiltroAdmin::Nao => !admin,
        }
    }

    /// Valor do `<select>` correspondente.
    pub fn valor(&self) -> &'static str {
        match self {
            FiltroAdmin::Todos => "todos",
            FiltroAdmin::Sim => "sim",
            FiltroAdmin::Nao => "nao",
        }
    }

    pub fn do_valor(valor: &str) -> Self {
        match valor {
            "sim" => FiltroAdmin::Sim,
            "nao" => FiltroAdmin::Nao,
            _ => FiltroAdmin::Todos,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsuarioFiltro {
    pub nome: String,
    pub username: String,
    pub email: String,
    pub admin: FiltroAdmin,
}

impl UsuarioFiltro {
    pub fn aplica(&self, usuario: &Usuario) -> bool {
        contem(usuario.nome.as_deref().unwrap_or(""), &self.nome)
            && contem(&usuario.username, &self.username)
            && contem(&usuario.email, &self.email)
            && self.admin.aceita(usuario.admin)
    }
}

fn contem(texto: &str, busca: &str) -> bool {
    let busca = busca.trim();
    busca.is_empty() || texto.to_lowercase().contains(&busca.to_lowercase())
}

/// Filtro aplicado sobre o lote já buscado, com saída estável por id.
pub fn filtra_usuarios(usuarios: &[Usuario], filtro: &UsuarioFiltro) -> Vec<Usuario> {
    let mut resultado: Vec<Usuario> = usuarios
        .iter()
        .filter(|usuario| filtro.aplica(usuario))
        .cloned()
        .collect();
    resultado.sort_by_key(|usuario| usuario.id);
    resultado
}
