//! YAML export of the active user's partition

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::PartitionExport;
use crate::state::AppState;

pub fn export_yaml<W: Write>(state: &AppState, writer: &mut W) -> LedgerResult<()> {
    let export = PartitionExport::from_state(state)?;

    writeln!(writer, "# Spendwise export for {}", export.user.email)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::populated_state;

    #[test]
    fn test_export_yaml() {
        let state = populated_state();
        let mut buffer = Vec::new();
        export_yaml(&state, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# Spendwise export for alice@x.com"));

        let parsed: PartitionExport = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed.transactions, state.transactions);
        assert_eq!(parsed.goals, state.goals);
    }
}
