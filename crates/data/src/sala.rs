use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sala {
    pub id: i32,
    pub nome: String,
    pub local: String,
    #[serde(default)]
    pub capacidade: Option<i32>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub criador_id: Option<i32>,
    pub ativa: bool,
    #[serde(default, with = "datetime::iso_opt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "datetime::iso_opt")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaInput {
    pub nome: String,
    pub local: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativa: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroAtiva {
    #[default]
    Todas,
    Ativas,
    Inativas,
}

impl FiltroAtiva {
    pub fn aceita(&self, ativa: bool) -> bool {
        match self {
            FiltroAtiva::Todas => true,
            FiltroAtiva::Ativas => ativa,
            FiltroAtiva::Inativas => !ativa,
        }
    }

    pub fn valor(&self) -> &'static str {
        match self {
            FiltroAtiva::Todas => "todas",
            FiltroAtiva::Ativas => "ativas",
            FiltroAtiva::Inativas => "inativas",
        }
    }

    pub fn do_valor(valor: &str) -> Self {
        match valor {
            "ativas" => FiltroAtiva::Ativas,
            "inativas" => FiltroAtiva::Inativas,
            _ => FiltroAtiva::Todas,
        }
    }
}

/// Busca textual sobre nome e local, mais o recorte por situação.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaFiltro {
    pub texto: String,
    pub ativa: FiltroAtiva,
}

impl SalaFiltro {
    pub fn aplica(&self, sala: &Sala) -> bool {
        let busca = self.texto.trim().to_lowercase();
        let casa_texto = busca.is_empty()
            || sala.nome.to_lowercase().contains(&busca)
            || sala.local.to_lowercase().contains(&busca);
        casa_texto && self.ativa.aceita(sala.ativa)
    }
}

pub fn filtra_salas(salas: &[Sala], filtro: &SalaFiltro) -> Vec<Sala> {
    let mut resultado: Vec<Sala> = salas
        .iter()
        .filter(|sala| filtro.aplica(sala))
        .cloned()
        .collect();
    resultado.sort_by(|a, b| a.nome.to_lowercase().cmp(&b.nome.to_lowercase()));
    resultado
}
