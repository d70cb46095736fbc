use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();

/// The name of the sentinel file that records a job's exit status.
pub const STATUS_FILE_NAME: &str = "hpc_status";

/// The path marker identifying a cluster-provided executable.
///
/// The module system on the cluster installs interpreters and toolchains
/// under the `woody` filesystem, so a running executable whose path
/// contains this marker is on the cluster.
pub const CLUSTER_PATH_MARKER: &str = "woody";

/// The suffix carried by every scheduler binary on TinyGPU.
pub const TINYGPU_COMMAND_SUFFIX: &str = ".tinygpu";

/// The partitions bound to one GPU type, which must agree with the gres
/// string of the job.
pub const GPU_TYPED_PARTITIONS: [&str; 2] = ["a100", "v100"];

/// The default number of nodes for a job.
pub const DEFAULT_NODES: fn() -> u32 = || 1;

/// The default number of tasks (or processors) per node, sized for Woody.
pub const DEFAULT_TASKS_PER_NODE: fn() -> u32 = || 4;

/// The default wall clock limit of a job, `HH:MM:SS`.
pub const DEFAULT_WALLTIME: fn() -> String = || "24:00:00".to_string();

/// The default GPU request on TinyGPU: a single GPU of any type.
pub const DEFAULT_GRES: &str = "gpu:1";
