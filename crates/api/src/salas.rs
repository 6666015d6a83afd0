use data::sala::{Sala, SalaInput, SalaUpdateInput};
use serde_json::json;

use crate::{ApiError, Gateway};

const SALAS: &str = "\
query Salas($skip: Int, $limit: Int, $apenasAtivas: Boolean) {
  salas(skip: $skip, limit: $limit, apenasAtivas: $apenasAtivas) {
    id nome local capacidade descricao criadorId ativa createdAt updatedAt
  }
}";

const SALA: &str = "\
query Sala($salaId: Int!) {
  sala(salaId: $salaId) {
    id nome local capacidade descricao criadorId ativa createdAt updatedAt
  }
}";

const MINHAS_SALAS: &str = "\
query MinhasSalas($skip: Int, $limit: Int) {
  minhasSalas(skip: $skip, limit: $limit) {
    id nome local capacidade descricao criadorId ativa createdAt updatedAt
  }
}";

const CRIAR_SALA: &str = "\
mutation CriarSala($sala: SalaInput!) {
  criarSala(sala: $sala) {
    id nome local capacidade descricao criadorId ativa createdAt updatedAt
  }
}";

const ATUALIZAR_SALA: &str = "\
mutation AtualizarSala($salaId: Int!, $sala: SalaUpdateInput!) {
  atualizarSala(salaId: $salaId, sala: $sala) {
    id nome local capacidade descricao criadorId ativa createdAt updatedAt
  }
}";

const DELETAR_SALA: &str = "\
mutation DeletarSala($salaId: Int!) {
  deletarSala(salaId: $salaId)
}";

impl Gateway {
    pub async fn salas(
        &self,
        skip: i32,
        limit: i32,
        apenas_ativas: Option<bool>,
    ) -> Result<Vec<Sala>, ApiError> {
        let variaveis = json!({
            "skip": skip,
            "limit": limit,
            "apenasAtivas": apenas_ativas,
        });
        self.executa("salas", SALAS, variaveis).await
    }

    pub async fn sala(&self, sala_id: i32) -> Result<Sala, ApiError> {
        self.executa("sala", SALA, json!({ "salaId": sala_id })).await
    }

    /// Salas criadas pelo próprio usuário.
    pub async fn minhas_salas(&self, skip: i32, limit: i32) -> Result<Vec<Sala>, ApiError> {
        self.executa("minhasSalas", MINHAS_SALAS, json!({ "skip": skip, "limit": limit })).await
    }

    pub async fn criar_sala(&self, sala: &SalaInput) -> Result<Sala, ApiError> {
        self.executa("criarSala", CRIAR_SALA, json!({ "sala": sala })).await
    }

    pub async fn atualizar_sala(
        &self,
        sala_id: i32,
        sala: &SalaUpdateInput,
    ) -> Result<Sala, ApiError> {
        let variaveis = json!({ "salaId": sala_id, "sala": sala });
        self.executa("atualizarSala", ATUALIZAR_SALA, variaveis).await
    }

    pub async fn deletar_sala(&self, sala_id: i32) -> Result<bool, ApiError> {
        self.executa("deletarSala", DELETAR_SALA, json!({ "salaId": sala_id })).await
    }
}
