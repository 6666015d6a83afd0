pub mod confirmacao;
pub mod dashboard;
pub mod formulario;
pub mod historico;
pub mod layout;
pub mod login;
pub mod navbar;
pub mod notificacoes;
pub mod paginacao;
pub mod participantes;
pub mod perfil;
pub mod registro;
pub mod reserva_form;
pub mod reservas;
pub mod sala_modal;
pub mod salas;
pub mod usuario_modal;
pub mod usuarios;
