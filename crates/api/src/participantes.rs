use data::participante::{Participante, ReservaConvidada};
use serde_json::json;

use crate::{ApiError, Gateway};

const PARTICIPANTES_RESERVA: &str = "\
query ParticipantesReserva($reservaId: Int!) {
  participantesReserva(reservaId: $reservaId) {
    id reservaId usuarioId notificado
    usuario { id nome username email admin }
    createdAt
  }
}";

const ADICIONAR_PARTICIPANTE: &str = "\
mutation AdicionarParticipante($reservaId: Int!, $usuarioId: Int!) {
  adicionarParticipante(reservaId: $reservaId, usuarioId: $usuarioId) {
    id reservaId usuarioId notificado
    usuario { id nome username email admin }
    createdAt
  }
}";

const REMOVER_PARTICIPANTE: &str = "\
mutation RemoverParticipante($reservaId: Int!, $usuarioId: Int!) {
  removerParticipante(reservaId: $reservaId, usuarioId: $usuarioId)
}";

const MINHAS_RESERVAS_CONVIDADAS: &str = "\
query MinhasReservasConvidadas($apenasNaoNotificadas: Boolean, $apenasNaoVistas: Boolean) {
  minhasReservasConvidadas(apenasNaoNotificadas: $apenasNaoNotificadas, apenasNaoVistas: $apenasNaoVistas) {
    id notificado visto
    reserva {
      id local sala salaId dataHoraInicio dataHoraFim responsavelId
      responsavel { id nome username email admin }
      salaRel { id nome local capacidade descricao criadorId ativa }
      cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
    }
  }
}";

const CONTAR_RESERVAS_NAO_VISTAS: &str = "\
query ContarReservasNaoVistas {
  contarReservasNaoVistas
}";

const MARCAR_RESERVA_COMO_NOTIFICADA: &str = "\
mutation MarcarReservaComoNotificada($reservaId: Int!) {
  marcarReservaComoNotificada(reservaId: $reservaId)
}";

const MARCAR_RESERVA_COMO_VISTA: &str = "\
mutation MarcarReservaComoVista($reservaId: Int!) {
  marcarReservaComoVista(reservaId: $reservaId)
}";

impl Gateway {
    pub async fn participantes_reserva(
        &self,
        reserva_id: i32,
    ) -> Result<Vec<Participante>, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id });
        self.executa("participantesReserva", PARTICIPANTES_RESERVA, variaveis).await
    }

    pub async fn adicionar_participante(
        &self,
        reserva_id: i32,
        usuario_id: i32,
    ) -> Result<Participante, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id, "usuarioId": usuario_id });
        self.executa("adicionarParticipante", ADICIONAR_PARTICIPANTE, variaveis).await
    }

    pub async fn remover_participante(
        &self,
        reserva_id: i32,
        usuario_id: i32,
    ) -> Result<bool, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id, "usuarioId": usuario_id });
        self.executa("removerParticipante", REMOVER_PARTICIPANTE, variaveis).await
    }

    /// Convites do usuário logado, com recortes opcionais para quem
    /// ainda não foi notificado ou ainda não viu.
    pub async fn minhas_reservas_convidadas(
        &self,
        apenas_nao_notificadas: Option<bool>,
        apenas_nao_vistas: Option<bool>,
    ) -> Result<Vec<ReservaConvidada>, ApiError> {
        let variaveis = json!({
            "apenasNaoNotificadas": apenas_nao_notificadas,
            "apenasNaoVistas": apenas_nao_vistas,
        });
        self.executa("minhasReservasConvidadas", MINHAS_RESERVAS_CONVIDADAS, variaveis).await
    }

    /// Número que alimenta o selo do sino da barra de navegação.
    pub async fn contar_reservas_nao_vistas(&self) -> Result<i32, ApiError> {
        self.executa("contarReservasNaoVistas", CONTAR_RESERVAS_NAO_VISTAS, json!({})).await
    }

    pub async fn marcar_reserva_como_notificada(&self, reserva_id: i32) -> Result<bool, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id });
        self.executa("marcarReservaComoNotificada", MARCAR_RESERVA_COMO_NOTIFICADA, variaveis)
            .await
    }

    pub async fn marcar_reserva_como_vista(&self, reserva_id: i32) -> Result<bool, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id });
        self.executa("marcarReservaComoVista", MARCAR_RESERVA_COMO_VISTA, variaveis).await
    }
}
