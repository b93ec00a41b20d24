use crate::models::{CategoryTable, PathMapping, Replacement};
use crate::organizer::mover::{FileMover, MoveOutcome};
use crate::organizer::preview::PreviewTree;
use crate::organizer::rewriter::{rewrite_file, RewriteOutcome};
use crate::organizer::scan::find_uncategorized;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Resolved filesystem locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Flat directory holding the stylesheets before the run
    pub components_dir: PathBuf,
    /// Aggregator importing `<styles_prefix><file>`
    pub styles_index: PathBuf,
    /// Aggregator rewritten with the fixed root rewrites
    pub root_index: PathBuf,
    pub styles_prefix: String,
}

/// Everything one run did, in step order
#[derive(Debug, Clone)]
pub struct RunReport {
    pub dry_run: bool,
    pub plan: PreviewTree,
    pub created_dirs: Vec<PathBuf>,
    pub moves: MoveOutcome,
    pub styles_index: RewriteOutcome,
    pub root_index: RewriteOutcome,
    pub uncategorized: Vec<PathBuf>,
}

/// Sorts the flat stylesheet directory into category folders and keeps the
/// two aggregator files pointing at the new locations
pub struct Reorganizer {
    layout: Layout,
    table: CategoryTable,
    root_rewrites: Vec<Replacement>,
    mover: FileMover,
}

impl Reorganizer {
    pub fn new(layout: Layout, table: CategoryTable, root_rewrites: Vec<Replacement>) -> Self {
        let mover = FileMover::new(&layout.components_dir);
        Self {
            layout,
            table,
            root_rewrites,
            mover,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Directories to create, moves whose source exists, and files not found
    pub fn plan(&self) -> PreviewTree {
        self.mover.plan(&self.table)
    }

    pub fn create_category_directories(&self, plan: &PreviewTree) -> Result<Vec<PathBuf>> {
        self.mover.create_directories(plan)
    }

    pub fn move_files(&self, plan: &PreviewTree) -> Result<MoveOutcome> {
        self.mover.move_files(plan, &self.layout.styles_prefix)
    }

    /// Apply the move mapping to the styles index
    pub fn rewrite_styles_index(&self, mapping: &PathMapping, dry_run: bool) -> Result<RewriteOutcome> {
        rewrite_file(&self.layout.styles_index, mapping.entries(), dry_run)
    }

    /// Apply the fixed root rewrites to the root index, whatever was moved
    pub fn rewrite_root_index(&self, dry_run: bool) -> Result<RewriteOutcome> {
        rewrite_file(&self.layout.root_index, &self.root_rewrites, dry_run)
    }

    /// Plan and run every step
    pub fn run(&self, dry_run: bool) -> Result<RunReport> {
        let plan = self.plan();
        self.run_plan(plan, dry_run)
    }

    /// Run every step for a plan produced by [`Reorganizer::plan`].
    ///
    /// Any filesystem error aborts the run where it happens; moves already
    /// made stay in place.
    pub fn run_plan(&self, plan: PreviewTree, dry_run: bool) -> Result<RunReport> {
        let (created_dirs, moves) = if dry_run {
            (Vec::new(), self.simulate_moves(&plan))
        } else {
            info!("Creating category folders...");
            let created_dirs = self.create_category_directories(&plan)?;
            info!("Moving files to categories...");
            let moves = self.move_files(&plan)?;
            (created_dirs, moves)
        };

        info!("Updating imports...");
        let styles_index = self.rewrite_styles_index(&moves.mapping, dry_run)?;
        let root_index = self.rewrite_root_index(dry_run)?;

        let uncategorized = find_uncategorized(&self.layout.components_dir, &self.table)?;
        for path in &uncategorized {
            warn!("⚠ Not in any category: {}", path.display());
        }

        Ok(RunReport {
            dry_run,
            plan,
            created_dirs,
            moves,
            styles_index,
            root_index,
            uncategorized,
        })
    }

    /// What the move step would record, without touching any file
    fn simulate_moves(&self, plan: &PreviewTree) -> MoveOutcome {
        let mut outcome = MoveOutcome {
            missing: plan.missing.clone(),
            ..MoveOutcome::default()
        };
        for op in &plan.files_to_move {
            outcome
                .mapping
                .record(&self.layout.styles_prefix, &op.category, &op.file);
            outcome.moved.push(op.clone());
        }
        outcome
    }
}
