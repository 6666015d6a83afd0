use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::datetime;
use crate::sala::Sala;
use crate::usuario::Usuario;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    pub id: i32,
    /// Rótulo livre de sala usado por registros antigos, anteriores ao
    /// cadastro de salas.
    #[serde(default)]
    pub sala: Option<String>,
    #[serde(default)]
    pub local: Option<String>,
    #[serde(default)]
    pub sala_id: Option<i32>,
    #[serde(default)]
    pub sala_rel: Option<Sala>,
    #[serde(with = "datetime::iso")]
    pub data_hora_inicio: NaiveDateTime,
    #[serde(with = "datetime::iso")]
    pub data_hora_fim: NaiveDateTime,
    pub responsavel_id: i32,
    #[serde(default)]
    pub responsavel: Option<Usuario>,
    #[serde(default)]
    pub cafe_quantidade: Option<i32>,
    #[serde(default)]
    pub cafe_descricao: Option<String>,
    #[serde(default)]
    pub link_meet: Option<String>,
    #[serde(default, with = "datetime::iso_opt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "datetime::iso_opt")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Reserva {
    pub fn eh_futura(&self, agora: NaiveDateTime) -> bool {
        self.data_hora_inicio > agora
    }

    pub fn eh_passada(&self, agora: NaiveDateTime) -> bool {
        self.data_hora_fim < agora
    }

    pub fn nome_responsavel(&self) -> &str {
        match &self.responsavel {
            Some(usuario) => usuario.exibicao(),
            None => "N/A",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservaInput {
    pub sala_id: i32,
    #[serde(with = "datetime::iso")]
    pub data_hora_inicio: NaiveDateTime,
    #[serde(with = "datetime::iso")]
    pub data_hora_fim: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_quantidade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_meet: Option<String>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservaUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sala_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", with = "datetime::iso_opt")]
    pub data_hora_inicio: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", with = "datetime::iso_opt")]
    pub data_hora_fim: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_quantidade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_meet: Option<String>,
}

/// Item de "meu histórico": a reserva mais o papel do usuário nela.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricoItem {
    #[serde(default)]
    pub sou_responsavel: bool,
    pub reserva: Reserva,
}

/// Nome de sala com a cadeia de retrocesso dos registros antigos:
/// relação carregada, busca por id no lote de salas, rótulo livre, "N/A".
pub fn nome_da_sala(reserva: &Reserva, salas: &[Sala]) -> String {
    if let Some(sala) = &reserva.sala_rel {
        return sala.nome.clone();
    }
    if let Some(sala_id) = reserva.sala_id {
        if let Some(sala) = salas.iter().find(|sala| sala.id == sala_id) {
            return sala.nome.clone();
        }
    }
    match &reserva.sala {
        Some(rotulo) if !rotulo.trim().is_empty() => rotulo.clone(),
        _ => "N/A".into(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservaFiltro {
    pub sala_id: Option<i32>,
    pub data: Option<NaiveDate>,
}

impl ReservaFiltro {
    pub fn aplica(&self, reserva: &Reserva) -> bool {
        if let Some(sala_id) = self.sala_id {
            let id_reserva = reserva
                .sala_id
                .or_else(|| reserva.sala_rel.as_ref().map(|sala| sala.id));
            if id_reserva != Some(sala_id) {
                return false;
            }
        }
        if let Some(data) = self.data {
            if reserva.data_hora_inicio.date() != data {
                return false;
            }
        }
        true
    }
}

pub fn filtra_reservas(reservas: &[Reserva], filtro: &ReservaFiltro) -> Vec<Reserva> {
    let mut resultado: Vec<Reserva> = reservas
        .iter()
        .filter(|reserva| filtro.aplica(reserva))
        .cloned()
        .collect();
    resultado.sort_by_key(|reserva| reserva.data_hora_inicio);
    resultado
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroPapel {
    #[default]
    Todos,
    Responsavel,
    Participante,
}

impl FiltroPapel {
    pub fn aceita(&self, sou_responsavel: bool) -> bool {
        match self {
            FiltroPapel::Todos => true,
            FiltroPapel::Responsavel => sou_responsavel,
            FiltroPapel::Participante => !sou_responsavel,
        }
    }

    pub fn valor(&self) -> &'static str {
        match self {
            FiltroPapel::Todos => "todos",
            FiltroPapel::Responsavel => "responsavel",
            FiltroPapel::Participante => "participante",
        }
    }

    pub fn do_valor(valor: &str) -> Self {
        match valor {
            "responsavel" => FiltroPapel::Responsavel,
            "participante" => FiltroPapel::Participante,
            _ => FiltroPapel::Todos,
        }
    }
}

/// Recorte passado/futuro do histórico; vira flags da própria consulta,
/// não filtro local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipoHistorico {
    #[default]
    Todas,
    Futuras,
    Passadas,
}

impl TipoHistorico {
    /// Flags `(apenasFuturas, apenasPassadas)` da consulta.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            TipoHistorico::Todas => (false, false),
            TipoHistorico::Futuras => (true, false),
            TipoHistorico::Passadas => (false, true),
        }
    }

    pub fn valor(&self) -> &'static str {
        match self {
            TipoHistorico::Todas => "todas",
            TipoHistorico::Futuras => "futuras",
            TipoHistorico::Passadas => "passadas",
        }
    }

    pub fn do_valor(valor: &str) -> Self {
        match valor {
            "futuras" => TipoHistorico::Futuras,
            "passadas" => TipoHistorico::Passadas,
            _ => TipoHistorico::Todas,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricoFiltro {
    pub sala_id: Option<i32>,
    pub data: Option<NaiveDate>,
    pub papel: FiltroPapel,
}

impl HistoricoFiltro {
    pub fn aplica(&self, item: &HistoricoItem) -> bool {
        let filtro_reserva = ReservaFiltro {
            sala_id: self.sala_id,
            data: self.data,
        };
        filtro_reserva.aplica(&item.reserva) && self.papel.aceita(item.sou_responsavel)
    }
}

/// Histórico filtrado, do mais recente para o mais antigo.
pub fn filtra_historico(itens: &[HistoricoItem], filtro: &HistoricoFiltro) -> Vec<HistoricoItem> {
    let mut resultado: Vec<HistoricoItem> = itens
        .iter()
        .filter(|item| filtro.aplica(item))
        .cloned()
        .collect();
    resultado.sort_by(|a, b| b.reserva.data_hora_inicio.cmp(&a.reserva.data_hora_inicio));
    resultado
}
