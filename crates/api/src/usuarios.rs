use data::usuario::{Usuario, UsuarioInput, UsuarioUpdateInput};
use serde_json::json;

use crate::{ApiError, Gateway};

const USUARIOS: &str = "\
query Usuarios($skip: Int, $limit: Int) {
  usuarios(skip: $skip, limit: $limit) {
    id nome username email admin createdAt
  }
}";

const USUARIOS_NAO_ADMIN: &str = "\
query UsuariosNaoAdmin {
  usuariosNaoAdmin {
    id nome username email admin createdAt
  }
}";

const CRIAR_USUARIO_ADMIN: &str = "\
mutation CriarUsuarioAdmin($usuario: UsuarioAdminInput!) {
  criarUsuarioAdmin(usuario: $usuario) {
    id nome username email admin createdAt
  }
}";

const ATUALIZAR_USUARIO_ADMIN: &str = "\
mutation AtualizarUsuarioAdmin($usuarioId: Int!, $usuario: UsuarioAdminUpdateInput!) {
  atualizarUsuarioAdmin(usuarioId: $usuarioId, usuario: $usuario) {
    id nome username email admin createdAt
  }
}";

const DELETAR_USUARIO: &str = "\
mutation DeletarUsuario($usuarioId: Int!) {
  deletarUsuario(usuarioId: $usuarioId)
}";

impl Gateway {
    /// Lote completo para a tela de administração.
    pub async fn usuarios(&self, skip: i32, limit: i32) -> Result<Vec<Usuario>, ApiError> {
        self.executa("usuarios", USUARIOS, json!({ "skip": skip, "limit": limit })).await
    }

    /// Candidatos a convite de participação.
    pub async fn usuarios_nao_admin(&self) -> Result<Vec<Usuario>, ApiError> {
        self.executa("usuariosNaoAdmin", USUARIOS_NAO_ADMIN, json!({})).await
    }

    pub async fn criar_usuario_admin(&self, usuario: &UsuarioInput) -> Result<Usuario, ApiError> {
        self.executa("criarUsuarioAdmin", CRIAR_USUARIO_ADMIN, json!({ "usuario": usuario }))
            .await
    }

    pub async fn atualizar_usuario_admin(
        &self,
        usuario_id: i32,
        usuario: &UsuarioUpdateInput,
    ) -> Result<Usuario, ApiError> {
        let variaveis = json!({ "usuarioId": usuario_id, "usuario": usuario });
        self.executa("atualizarUsuarioAdmin", ATUALIZAR_USUARIO_ADMIN, variaveis).await
    }

    pub async fn deletar_usuario(&self, usuario_id: i32) -> Result<bool, ApiError> {
        self.executa("deletarUsuario", DELETAR_USUARIO, json!({ "usuarioId": usuario_id })).await
    }
}
