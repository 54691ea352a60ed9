use thiserror::Error;

use crate::controllers::workbench::actions::BatchAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("cannot run {action}: a batch is still running")]
    Busy { action: BatchAction },
}
