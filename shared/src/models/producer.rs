//! Producer payloads

use serde::{Deserialize, Serialize};

/// Payload for creating or replacing a producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerInput {
    pub name: String,
    /// CPF (11 digits) or CNPJ (14 digits), with or without punctuation.
    pub cpf_cnpj: String,
}
