//! Validação síncrona dos formulários. Cada `valida` devolve um mapa
//! ordenado campo → mensagem; mapa vazio significa que a submissão pode
//! seguir para a mutação. Nenhuma validação daqui toca a rede.

use chrono::Duration;
use indexmap::IndexMap;

use crate::datetime::parse_data_iso;
use crate::horarios::hora_do_rotulo;
use crate::reserva::ReservaInput;
use crate::sala::{SalaInput, SalaUpdateInput};

pub type ErrosFormulario = IndexMap<&'static str, String>;

pub const SENHA_MIN: usize = 6;
pub const SENHA_MAX: usize = 72;

/// Mesmo recorte do clássico `/^[^\s@]+@[^\s@]+\.[^\s@]+$/`: parte local,
/// arroba única e domínio com ponto interno.
pub fn email_valido(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, dominio)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || dominio.is_empty() || dominio.contains('@') {
        return false;
    }
    dominio.contains('.') && !dominio.starts_with('.') && !dominio.ends_with('.')
}

fn valida_senha_nova(senha: &str, chave: &'static str, erros: &mut ErrosFormulario) {
    let tamanho = senha.chars().count();
    if tamanho < SENHA_MIN {
        erros.insert(
            chave,
            format!("A senha deve ter pelo menos {SENHA_MIN} caracteres."),
        );
    } else if tamanho > SENHA_MAX {
        erros.insert(
            chave,
            format!("A senha deve ter no máximo {SENHA_MAX} caracteres."),
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub senha: String,
}

impl LoginForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.username.trim().is_empty() {
            erros.insert("username", "O nome de usuário é obrigatório.".into());
        }
        if self.senha.is_empty() {
            erros.insert("senha", "A senha é obrigatória.".into());
        }
        erros
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistroForm {
    pub nome: String,
    pub username: String,
    pub email: String,
    pub senha: String,
    pub confirmar_senha: String,
}

impl RegistroForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.nome.trim().is_empty() {
            erros.insert("nome", "O nome é obrigatório.".into());
        }
        if self.username.trim().is_empty() {
            erros.insert("username", "O nome de usuário é obrigatório.".into());
        }
        if self.email.trim().is_empty() {
            erros.insert("email", "O email é obrigatório.".into());
        } else if !email_valido(&self.email) {
            erros.insert("email", "Informe um email válido.".into());
        }
        valida_senha_nova(&self.senha, "senha", &mut erros);
        if self.confirmar_senha != self.senha {
            erros.insert("confirmar_senha", "As senhas não coincidem.".into());
        }
        erros
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaForm {
    pub nome: String,
    pub local: String,
    pub capacidade: String,
    pub descricao: String,
    pub ativa: bool,
}

impl SalaForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.nome.trim().is_empty() {
            erros.insert("nome", "O nome da sala é obrigatório.".into());
        }
        if self.local.trim().is_empty() {
            erros.insert("local", "O local é obrigatório.".into());
        }
        if !self.capacidade.trim().is_empty() && parse_positivo(&self.capacidade).is_none() {
            erros.insert(
                "capacidade",
                "A capacidade deve ser um número positivo.".into(),
            );
        }
        erros
    }

    pub fn to_input(&self) -> SalaInput {
        SalaInput {
            nome: self.nome.trim().to_string(),
            local: self.local.trim().to_string(),
            capacidade: parse_positivo(&self.capacidade),
            descricao: texto_opcional(&self.descricao),
        }
    }

    /// Patch completo para edição; o backend ignora campos idênticos.
    pub fn to_update(&self) -> SalaUpdateInput {
        SalaUpdateInput {
            nome: Some(self.nome.trim().to_string()),
            local: Some(self.local.trim().to_string()),
            capacidade: parse_positivo(&self.capacidade),
            descricao: texto_opcional(&self.descricao),
            ativa: Some(self.ativa),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservaFormData {
    pub sala_id: String,
    pub data: String,
    pub horario: String,
    pub cafe_quantidade: String,
    pub cafe_descricao: String,
    pub link_meet: String,
}

impl ReservaFormData {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.sala_id.trim().is_empty() {
            erros.insert("sala_id", "Selecione uma sala.".into());
        }
        if self.data.trim().is_empty() {
            erros.insert("data", "Selecione uma data.".into());
        } else if parse_data_iso(&self.data).is_none() {
            erros.insert("data", "Data inválida.".into());
        }
        if self.horario.trim().is_empty() {
            erros.insert("horario", "Selecione um horário.".into());
        }
        let quantidade = self.cafe_quantidade.trim();
        if !quantidade.is_empty() && parse_positivo(quantidade).is_none() {
            erros.insert(
                "cafe_quantidade",
                "A quantidade de café deve ser um número positivo.".into(),
            );
        }
        if parse_positivo(quantidade).is_some() && self.cafe_descricao.trim().is_empty() {
            erros.insert("cafe_descricao", "Descreva o pedido de café.".into());
        }
        let link = self.link_meet.trim();
        if !link.is_empty() && !(link.starts_with("http://") || link.starts_with("https://")) {
            erros.insert(
                "link_meet",
                "O link deve começar com http:// ou https://.".into(),
            );
        }
        erros
    }

    /// Monta o corpo da mutação. `None` quando algum campo não passa na
    /// validação; a duração de uma hora é convenção fixa do sistema.
    pub fn to_input(&self) -> Option<ReservaInput> {
        if !self.valida().is_empty() {
            return None;
        }
        let sala_id: i32 = self.sala_id.trim().parse().ok()?;
        let data = parse_data_iso(&self.data)?;
        let hora = hora_do_rotulo(&self.horario)?;
        let inicio = data.and_hms_opt(hora, 0, 0)?;
        let fim = inicio + Duration::hours(1);

        Some(ReservaInput {
            sala_id,
            data_hora_inicio: inicio,
            data_hora_fim: fim,
            cafe_quantidade: parse_positivo(&self.cafe_quantidade),
            cafe_descricao: texto_opcional(&self.cafe_descricao),
            link_meet: texto_opcional(&self.link_meet),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfilForm {
    pub nome: String,
    pub email: String,
}

impl PerfilForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.nome.trim().is_empty() {
            erros.insert("nome", "O nome é obrigatório.".into());
        }
        if self.email.trim().is_empty() {
            erros.insert("email", "O email é obrigatório.".into());
        } else if !email_valido(&self.email) {
            erros.insert("email", "Informe um email válido.".into());
        }
        erros
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SenhaForm {
    pub senha_atual: String,
    pub nova_senha: String,
    pub confirmar_senha: String,
}

impl SenhaForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.senha_atual.is_empty() {
            erros.insert("senha_atual", "Informe a senha atual.".into());
        }
        valida_senha_nova(&self.nova_senha, "nova_senha", &mut erros);
        if self.confirmar_senha != self.nova_senha {
            erros.insert("confirmar_senha", "As senhas não coincidem.".into());
        }
        erros
    }
}

/// Formulário das telas de administração de usuários. Na criação a senha é
/// obrigatória; na edição só é validada quando preenchida.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsuarioForm {
    pub nome: String,
    pub username: String,
    pub email: String,
    pub senha: String,
    pub confirmar_senha: String,
    pub admin: bool,
    pub exigir_senha: bool,
}

impl UsuarioForm {
    pub fn valida(&self) -> ErrosFormulario {
        let mut erros = ErrosFormulario::new();
        if self.nome.trim().is_empty() {
            erros.insert("nome", "O nome é obrigatório.".into());
        }
        if self.username.trim().is_empty() {
            erros.insert("username", "O nome de usuário é obrigatório.".into());
        }
        if self.email.trim().is_empty() {
            erros.insert("email", "O email é obrigatório.".into());
        } else if !email_valido(&self.email) {
            erros.insert("email", "Informe um email válido.".into());
        }
        if self.exigir_senha || !self.senha.is_empty() {
            valida_senha_nova(&self.senha, "senha", &mut erros);
            if self.confirmar_senha != self.senha {
                erros.insert("confirmar_senha", "As senhas não coincidem.".into());
            }
        }
        erros
    }
}

fn parse_positivo(texto: &str) -> Option<i32> {
    let valor: i32 = texto.trim().parse().ok()?;
    (valor > 0).then_some(valor)
}

fn texto_opcional(texto: &str) -> Option<String> {
    let texto = texto.trim();
    if texto.is_empty() {
        None
    } else {
        Some(texto.to_string())
    }
}
