use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;
use crate::reserva::Reserva;
use crate::usuario::Usuario;

/// Vínculo entre uma reserva e um usuário convidado.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participante {
    pub id: i32,
    pub reserva_id: i32,
    pub usuario_id: i32,
    #[serde(default)]
    pub notificado: bool,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    #[serde(default, with = "datetime::iso_opt")]
    pub created_at: Option<NaiveDateTime>,
}

impl Participante {
    pub fn nome(&self) -> &str {
        match &self.usuario {
            Some(usuario) => usuario.exibicao(),
            None => "N/A",
        }
    }
}

/// Convite visto pelo lado do convidado, com as flags de notificação.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservaConvidada {
    pub id: i32,
    #[serde(default)]
    pub notificado: bool,
    #[serde(default)]
    pub visto: bool,
    pub reserva: Reserva,
}

/// Usuários que ainda podem ser convidados: exclui o responsável e quem
/// já participa.
pub fn candidatos_a_convite(
    usuarios: &[Usuario],
    participantes: &[Participante],
    responsavel_id: i32,
) -> Vec<Usuario> {
    usuarios
        .iter()
        .filter(|usuario| usuario.id != responsavel_id)
        .filter(|usuario| {
            !participantes
                .iter()
                .any(|participante| participante.usuario_id == usuario.id)
        })
        .cloned()
        .collect()
}
