pub mod dashboard;
pub mod datetime;
pub mod forms;
pub mod horarios;
pub mod paging;
pub mod participante;
pub mod reserva;
pub mod sala;
pub mod usuario;

pub use participante::{Participante, ReservaConvidada};
pub use reserva::{HistoricoItem, Reserva, ReservaInput, ReservaUpdateInput};
pub use sala::{Sala, SalaInput, SalaUpdateInput};
pub use usuario::{Credenciais, TokenResposta, Usuario, UsuarioInput, UsuarioUpdateInput};
