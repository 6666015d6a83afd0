use chrono::NaiveDate;
use data::datetime;
use data::reserva::{HistoricoItem, Reserva, ReservaInput, ReservaUpdateInput};
use serde_json::json;

use crate::{ApiError, Gateway, reescreve_conflito};

const RESERVAS: &str = "\
query Reservas($skip: Int, $limit: Int) {
  reservas(skip: $skip, limit: $limit) {
    id local sala salaId dataHoraInicio dataHoraFim responsavelId
    responsavel { id nome username email admin }
    salaRel { id nome local capacidade descricao criadorId ativa }
    cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
  }
}";

const RESERVA: &str = "\
query Reserva($reservaId: Int!) {
  reserva(reservaId: $reservaId) {
    id local sala salaId dataHoraInicio dataHoraFim responsavelId
    responsavel { id nome username email admin }
    salaRel { id nome local capacidade descricao criadorId ativa }
    cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
  }
}";

const CRIAR_RESERVA: &str = "\
mutation CriarReserva($reserva: ReservaInput!) {
  criarReserva(reserva: $reserva) {
    id local sala salaId dataHoraInicio dataHoraFim responsavelId
    responsavel { id nome username email admin }
    salaRel { id nome local capacidade descricao criadorId ativa }
    cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
  }
}";

const ATUALIZAR_RESERVA: &str = "\
mutation AtualizarReserva($reservaId: Int!, $reserva: ReservaUpdateInput!) {
  atualizarReserva(reservaId: $reservaId, reserva: $reserva) {
    id local sala salaId dataHoraInicio dataHoraFim responsavelId
    responsavel { id nome username email admin }
    salaRel { id nome local capacidade descricao criadorId ativa }
    cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
  }
}";

const DELETAR_RESERVA: &str = "\
mutation DeletarReserva($reservaId: Int!) {
  deletarReserva(reservaId: $reservaId)
}";

const MEU_HISTORICO: &str = "\
query MeuHistorico($apenasFuturas: Boolean, $apenasPassadas: Boolean, $skip: Int, $limit: Int) {
  meuHistorico(apenasFuturas: $apenasFuturas, apenasPassadas: $apenasPassadas, skip: $skip, limit: $limit) {
    souResponsavel
    reserva {
      id local sala salaId dataHoraInicio dataHoraFim responsavelId
      responsavel { id nome username email admin }
      salaRel { id nome local capacidade descricao criadorId ativa }
      cafeQuantidade cafeDescricao linkMeet createdAt updatedAt
    }
  }
}";

impl Gateway {
    pub async fn reservas(&self, skip: i32, limit: i32) -> Result<Vec<Reserva>, ApiError> {
        self.executa("reservas", RESERVAS, json!({ "skip": skip, "limit": limit })).await
    }

    pub async fn reserva(&self, reserva_id: i32) -> Result<Reserva, ApiError> {
        self.executa("reserva", RESERVA, json!({ "reservaId": reserva_id })).await
    }

    /// Conflito de agenda volta com [`crate::MENSAGEM_CONFLITO`] no
    /// lugar do texto cru do backend.
    pub async fn criar_reserva(&self, reserva: &ReservaInput) -> Result<Reserva, ApiError> {
        self.executa("criarReserva", CRIAR_RESERVA, json!({ "reserva": reserva }))
            .await
            .map_err(reescreve_conflito)
    }

    /// Conflito de agenda volta com [`crate::MENSAGEM_CONFLITO`] no
    /// lugar do texto cru do backend.
    pub async fn atualizar_reserva(
        &self,
        reserva_id: i32,
        reserva: &ReservaUpdateInput,
    ) -> Result<Reserva, ApiError> {
        let variaveis = json!({ "reservaId": reserva_id, "reserva": reserva });
        self.executa("atualizarReserva", ATUALIZAR_RESERVA, variaveis)
            .await
            .map_err(reescreve_conflito)
    }

    pub async fn deletar_reserva(&self, reserva_id: i32) -> Result<bool, ApiError> {
        self.executa("deletarReserva", DELETAR_RESERVA, json!({ "reservaId": reserva_id })).await
    }

    /// Rótulos de hora já tomados na sala/data. Os argumentos vão
    /// inline porque `data` usa o scalar de data do backend, que não
    /// tem nome estável para declarar em `$variáveis`.
    pub async fn horarios_ocupados(
        &self,
        sala_id: i32,
        data: NaiveDate,
    ) -> Result<Vec<String>, ApiError> {
        let documento = format!(
            "query HorariosOcupados {{\n  horariosOcupados(salaId: {sala_id}, data: \"{}\")\n}}",
            datetime::data_iso(data),
        );
        self.executa("horariosOcupados", &documento, json!({})).await
    }

    /// Reservas em que participo ou sou responsável; os recortes
    /// passado/futuro são do servidor, não filtro local.
    pub async fn meu_historico(
        &self,
        apenas_futuras: bool,
        apenas_passadas: bool,
        skip: i32,
        limit: i32,
    ) -> Result<Vec<HistoricoItem>, ApiError> {
        let variaveis = json!({
            "apenasFuturas": apenas_futuras,
            "apenasPassadas": apenas_passadas,
            "skip": skip,
            "limit": limit,
        });
        self.executa("meuHistorico", MEU_HISTORICO, variaveis).await
    }
}
