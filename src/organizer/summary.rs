use crate::models::CategoryTable;
use crate::organizer::reorganizer::RunReport;
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Human-readable end-of-run report
pub struct Summary<'a> {
    table: &'a CategoryTable,
    report: &'a RunReport,
}

impl<'a> Summary<'a> {
    pub fn new(table: &'a CategoryTable, report: &'a RunReport) -> Self {
        Self { table, report }
    }

    /// Files listed in the table, which is what the headline count reports
    pub fn listed_files(&self) -> usize {
        self.table.total_files()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let title = if self.report.dry_run {
            "CSS REORGANIZATION DRY RUN"
        } else {
            "CSS REORGANIZATION COMPLETE"
        };
        writeln!(f, "\n{rule}\n{title}\n{rule}")?;

        writeln!(f, "\n📁 Created {} category folders:", self.table.len())?;
        for category in self.table.categories() {
            writeln!(f, "   - {}/", category.name)?;
        }

        writeln!(f, "\n📄 Moved {} CSS files", self.listed_files())?;
        let missing = self.report.moves.missing.len();
        if missing > 0 {
            writeln!(
                f,
                "   ({} moved, {} not found)",
                self.report.moves.moved.len(),
                missing
            )?;
        }

        writeln!(f, "\n📝 Updated imports in:")?;
        for outcome in [&self.report.styles_index, &self.report.root_index] {
            let note = if outcome.is_updated() { "" } else { " (not found, skipped)" };
            writeln!(f, "   - {}{}", outcome.path().display(), note)?;
        }

        if self.report.dry_run {
            write!(f, "\nDry run completed. No files were moved.\n")
        } else {
            write!(f, "\n✅ All done! No regressions - all imports updated.\n")
        }
    }
}
