use data::usuario::{Credenciais, TokenResposta, Usuario, UsuarioInput, UsuarioUpdateInput};
use serde_json::json;

use crate::{ApiError, Gateway};

const LOGIN: &str = "\
mutation Login($loginData: LoginInput!) {
  login(loginData: $loginData) {
    accessToken
    tokenType
  }
}";

const CRIAR_USUARIO: &str = "\
mutation CriarUsuario($usuario: UsuarioInput!) {
  criarUsuario(usuario: $usuario) {
    id nome username email admin createdAt
  }
}";

const MEU_PERFIL: &str = "\
query MeuPerfil {
  meuPerfil {
    id nome username email admin createdAt
  }
}";

const ATUALIZAR_PERFIL: &str = "\
mutation AtualizarPerfil($usuario: UsuarioUpdateInput!) {
  atualizarPerfil(usuario: $usuario) {
    id nome username email admin createdAt
  }
}";

impl Gateway {
    pub async fn login(&self, credenciais: &Credenciais) -> Result<TokenResposta, ApiError> {
        self.executa("login", LOGIN, json!({ "loginData": credenciais })).await
    }

    /// Auto-cadastro; a tela de administração usa
    /// [`Gateway::criar_usuario_admin`].
    pub async fn criar_usuario(&self, usuario: &UsuarioInput) -> Result<Usuario, ApiError> {
        self.executa("criarUsuario", CRIAR_USUARIO, json!({ "usuario": usuario })).await
    }

    pub async fn meu_perfil(&self) -> Result<Usuario, ApiError> {
        self.executa("meuPerfil", MEU_PERFIL, json!({})).await
    }

    /// Atualiza nome/e-mail ou, com apenas `password` preenchido,
    /// troca a senha do próprio usuário.
    pub async fn atualizar_perfil(&self, usuario: &UsuarioUpdateInput) -> Result<Usuario, ApiError> {
        self.executa("atualizarPerfil", ATUALIZAR_PERFIL, json!({ "usuario": usuario })).await
    }
}
