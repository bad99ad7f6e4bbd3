// the rules is in following order:
//  - RUSTC ALLOW
//  - RUSTC WARNING
//  - CLIPPY
// rustc rules not enabled:
//  - box_pointers
//  - missing_copy_implementations
//  - missing_debug_implementations
//  - missing_docs
//  - non_exhaustive_omitted_patterns
//  - unreachable_pub
//  - unsafe_code
//  - unused_crate_dependencies
//  - unused_qualifications
//  - unused_results
//  - variant_size_differences
#![cfg_attr(
    feature = "cargo-clippy",
    cfg_attr(feature = "c_unwind", deny(ffi_unwind_calls)),
    cfg_attr(feature = "strict_provenance", deny(fuzzy_provenance_casts, lossy_provenance_casts)),
    cfg_attr(feature = "must_not_suspend", deny(must_not_suspend)),
    cfg_attr(feature = "lint_reasons", deny(unfulfilled_lint_expectations)),
    deny(
        absolute_paths_not_starting_with_crate,
        deprecated_in_future,
        elided_lifetimes_in_paths,
        explicit_outlives_requirements,
        keyword_idents,
        let_underscore_drop,
        macro_use_extern_crate,
        meta_variable_misuse,
        missing_abi,
        non_ascii_idents,
        noop_method_call,
        pointer_structural_match,
        rust_2021_incompatible_closure_captures,
        rust_2021_incompatible_or_patterns,
        rust_2021_prefixes_incompatible_syntax,
        rust_2021_prelude_collisions,
        single_use_lifetimes,
        trivial_casts,
        trivial_numeric_casts,
        unsafe_op_in_unsafe_fn,
        unused_extern_crates,
        unused_import_braces,
        unused_lifetimes,
        unused_macro_rules,
        unused_tuple_struct_fields,
        anonymous_parameters,
        array_into_iter,
        asm_sub_register,
        bad_asm_style,
        bare_trait_objects,
        bindings_with_variant_name,
        break_with_label_and_loop,
        clashing_extern_declarations,
        coherence_leak_check,
        confusable_idents,
        const_evaluatable_unchecked,
        const_item_mutation,
        dead_code,
        deprecated_where_clause_location,
        deref_into_dyn_supertrait,
        deref_nullptr,
        drop_bounds,
        duplicate_macro_attributes,
        dyn_drop,
        ellipsis_inclusive_range_patterns,
        exported_private_dependencies,
        for_loops_over_fallibles,
        forbidden_lint_groups,
        function_item_references,
        illegal_floating_point_literal_pattern,
        improper_ctypes,
        improper_ctypes_definitions,
        incomplete_features,
        indirect_structural_match,
        inline_no_sanitize,
        invalid_doc_attributes,
        invalid_value,
        irrefutable_let_patterns,
        large_assignments,
        late_bound_lifetime_arguments,
        legacy_derive_helpers,
        mixed_script_confusables,
        named_arguments_used_positionally,
        no_mangle_generic_items,
        non_camel_case_types,
        non_fmt_panics,
        non_shorthand_field_patterns,
        non_snake_case,
        non_upper_case_globals,
        nontrivial_structural_match,
        opaque_hidden_inferred_bound,
        overlapping_range_endpoints,
        path_statements,
        private_in_public,
        redundant_semicolons,
        renamed_and_removed_lints,
        repr_transparent_external_private_fields,
        semicolon_in_expressions_from_macros,
        special_module_name,
        stable_features,
        suspicious_auto_trait_impls,
        temporary_cstring_as_ptr,
        trivial_bounds,
        type_alias_bounds,
        tyvar_behind_raw_pointer,
        uncommon_codepoints,
        unconditional_recursion,
        unexpected_cfgs,
        uninhabited_static,
        unknown_lints,
        unnameable_test_items,
        unreachable_code,
        unreachable_patterns,
        unstable_name_collisions,
        unstable_syntax_pre_expansion,
        unsupported_calling_conventions,
        unused_allocation,
        unused_assignments,
        unused_attributes,
        unused_braces,
        unused_comparisons,
        unused_doc_comments,
        unused_features,
        unused_imports,
        unused_labels,
        unused_macros,
        unused_must_use,
        unused_mut,
        unused_parens,
        unused_unsafe,
        unused_variables,
        where_clauses_object_safety,
        while_true,
        clippy::all,
        clippy::cargo,
        clippy::nursery,
        clippy::pedantic
    ),
    warn(unstable_features),
    allow(
        clippy::future_not_send,
        clippy::module_name_repetitions,
        clippy::multiple_crate_versions,
    )
)]

mod error;

use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfmt_core::Token;
use portfmt_edit::passes::{dedup_tokens, merge, sanitize_append_modifier, set_version, sort_tokens, MergeOptions};
use portfmt_edit::{output, MetadataCache};
use portfmt_parser::{tokenize, ParserSettings};
use portfmt_rules::{FuzzyContext, RulesContext};
use similar::TextDiff;
use snafu::ResultExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use self::error::Error;
use self::error::WriteFileSnafu;
use self::error::Result;

/// Standard bmake special targets, excluded from `output-unknown-targets`
/// (spec.md §4.4).
const SPECIAL_SOURCES: &[&str] = &[
    ".BEGIN", ".END", ".ERROR", ".DEFAULT", ".PHONY", ".PRECIOUS", ".IGNORE", ".SILENT",
    ".SUFFIXES", ".PATH", ".NOTPARALLEL", ".ORDER", ".EXEC", ".NOPATH", ".OPTIONAL", ".META",
    ".MADE", ".MAIN", ".POSIX", ".WAIT",
];

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port Makefile to read (stdin if omitted)
    file: Option<PathBuf>,

    #[clap(flatten)]
    settings: SettingsArgs,
}

impl Default for Cli {
    #[inline]
    fn default() -> Self { Self::parse() }
}

#[derive(Debug, Clone, Args)]
struct SettingsArgs {
    /// Edit the file in place instead of writing to stdout
    #[clap(short = 'i', long)]
    in_place: bool,

    /// Force `should_sort` on for every sortable variable
    #[clap(short = 'u', long)]
    always_sort: bool,

    /// Column to wrap variable values at
    #[clap(short = 'w', long, default_value_t = 80)]
    wrapcol: usize,

    /// Column to wrap target command lines at
    #[clap(long, default_value_t = 80)]
    target_command_wrapcol: usize,

    /// Print a unified diff instead of the formatted file
    #[clap(long)]
    diff: bool,

    /// Disable ANSI colors in diagnostic output
    #[clap(long)]
    no_color: bool,

    /// Print the raw token stream instead of rendering it
    #[clap(long)]
    dump_tokens: bool,

    /// Enable debug-level logging
    #[clap(long)]
    debug: bool,

    /// Relax declared-name side conditions on fuzzy recognizers
    #[clap(long)]
    allow_fuzzy_matching: bool,
}

impl Default for SettingsArgs {
    fn default() -> Self {
        Self {
            in_place: false,
            always_sort: false,
            wrapcol: 80,
            target_command_wrapcol: 80,
            diff: false,
            no_color: false,
            dump_tokens: false,
            debug: false,
            allow_fuzzy_matching: false,
        }
    }
}

impl SettingsArgs {
    fn to_parser_settings(&self) -> ParserSettings {
        ParserSettings {
            always_sort: self.always_sort,
            allow_fuzzy_matching: self.allow_fuzzy_matching,
            output_inplace: self.in_place,
            output_diff: self.diff,
            output_no_color: self.no_color,
            dump_tokens: self.dump_tokens,
            wrapcol: self.wrapcol,
            target_command_wrapcol: self.target_command_wrapcol,
            debug: self.debug,
            ..ParserSettings::default()
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List variables the rules table doesn't recognize")]
    OutputUnknownVariables {
        file: Option<PathBuf>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "List targets not reachable from a known target")]
    OutputUnknownTargets {
        file: Option<PathBuf>,
        /// Target reachable via the post-install PLIST, may repeat
        #[clap(long = "post-plist-target")]
        post_plist_targets: Vec<String>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "Print one variable's value")]
    OutputVariableValue {
        var: String,
        file: Option<PathBuf>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "Rewrite the port's version, clearing a stale PORTREVISION")]
    SetVersion {
        version: String,
        file: Option<PathBuf>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "Flag variables out of their documented order")]
    LintOrder {
        file: Option<PathBuf>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "Flag duplicate variable assignments")]
    LintClones { file: Option<PathBuf> },

    #[command(about = "Flag a commented-out PORTREVISION")]
    LintCommentedPortrevision { file: Option<PathBuf> },

    #[command(about = "Flag a missing bsd.port*.mk include")]
    LintBsdPort { file: Option<PathBuf> },

    #[command(about = "Merge an overlay file's variables into the primary file")]
    Merge {
        overlay_file: PathBuf,
        file: Option<PathBuf>,
        #[clap(flatten)]
        settings: SettingsArgs,
    },

    #[command(about = "Print shell completions")]
    Completions { shell: Shell },
}

impl Cli {
    /// # Errors
    ///
    /// Returns an error if the input can't be read, tokenized, or edited.
    pub fn run(self) -> Result<ExitCode> {
        init_tracing(self.settings.debug);

        match self.command {
            None => run_format(self.file, &self.settings),
            Some(Commands::OutputUnknownVariables { file, settings }) => {
                run_lines(file, &settings, |tokens, ctx| output::output_unknown_variables(tokens, ctx))
            }
            Some(Commands::OutputUnknownTargets { file, post_plist_targets, settings }) => {
                let special: HashSet<String> = SPECIAL_SOURCES.iter().map(|s| (*s).to_string()).collect();
                let post_plist: HashSet<String> = post_plist_targets.into_iter().collect();
                run_lines(file, &settings, move |tokens, _ctx| {
                    output::output_unknown_targets(tokens, &special, &post_plist)
                })
            }
            Some(Commands::OutputVariableValue { var, file, settings }) => {
                run_lines(file, &settings, move |tokens, _ctx| output::output_variable_value(tokens, &var))
            }
            Some(Commands::SetVersion { version, file, settings }) => {
                run_edit(file, &settings, move |tokens, ctx| set_version(tokens, &version, ctx))
            }
            Some(Commands::LintOrder { file, settings }) => run_lines(file, &settings, |tokens, ctx| {
                output::lint_order(tokens, ctx).into_iter().map(|d| d.message).collect()
            }),
            Some(Commands::LintClones { file }) => run_lines(file, &SettingsArgs::default(), |tokens, _ctx| {
                output::lint_clones(tokens).into_iter().map(|d| d.message).collect()
            }),
            Some(Commands::LintCommentedPortrevision { file }) => {
                run_lines(file, &SettingsArgs::default(), |tokens, _ctx| {
                    output::lint_commented_portrevision(tokens).into_iter().map(|d| d.message).collect()
                })
            }
            Some(Commands::LintBsdPort { file }) => run_lines(file, &SettingsArgs::default(), |tokens, _ctx| {
                output::lint_bsd_port(tokens).into_iter().map(|d| d.message).collect()
            }),
            Some(Commands::Merge { overlay_file, file, settings }) => {
                let overlay_src = read_input(Some(overlay_file))?;
                let overlay = tokenize(&overlay_src)?;
                let parser_settings = settings.to_parser_settings();
                let opts = MergeOptions {
                    shell_is_delete: false,
                    optional_like_assign: parser_settings.merge_optional_like_assign,
                    merge_comments: parser_settings.merge_comments_unchanged,
                };
                run_edit(file, &settings, move |tokens, ctx| {
                    merge(tokens, &overlay, ctx, &opts);
                    Ok(())
                })
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                Ok(ExitCode::from(exitcode::OK as u8))
            }
        }
    }
}

fn build_context(tokens: &[Token], settings: &SettingsArgs) -> Box<dyn RulesContext> {
    if settings.allow_fuzzy_matching {
        Box::new(FuzzyContext)
    } else {
        Box::new(MetadataCache::scan(tokens, 0, settings.always_sort, settings.allow_fuzzy_matching))
    }
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|source| error::Error::ReadFile { path: path.display().to_string(), source }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| error::Error::ReadFile { path: "<stdin>".to_string(), source })?;
            Ok(buf)
        }
    }
}

fn emit_result(source: &str, formatted: &str, file: Option<PathBuf>, settings: &SettingsArgs) -> Result<ExitCode> {
    if settings.diff {
        let diff = TextDiff::from_lines(source, formatted);
        print!("{}", diff.unified_diff().context_radius(3).header("before", "after"));
    } else if settings.in_place {
        let path = file
            .ok_or_else(|| error::Error::InvalidArgument { message: "-i requires a FILE argument".to_string() })?;
        std::fs::write(&path, formatted).context(WriteFileSnafu { path: path.display().to_string() })?;
    } else {
        print!("{formatted}");
    }
    Ok(ExitCode::from(exitcode::OK as u8))
}

fn run_format(file: Option<PathBuf>, settings: &SettingsArgs) -> Result<ExitCode> {
    let source = read_input(file.clone())?;
    let mut tokens = tokenize(&source)?;

    let ctx = build_context(&tokens, settings);
    if settings.always_sort || ctx.always_sort() {
        sort_tokens(&mut tokens, ctx.as_ref());
    }
    dedup_tokens(&mut tokens, ctx.as_ref());
    sanitize_append_modifier(&mut tokens);

    if settings.dump_tokens {
        for token in &tokens {
            println!("{token:?}");
        }
        return Ok(ExitCode::from(exitcode::OK as u8));
    }

    let parser_settings = settings.to_parser_settings();
    let formatted = portfmt_render::render(&tokens, &parser_settings, ctx.as_ref());
    emit_result(&source, &formatted, file, settings)
}

fn run_lines(
    file: Option<PathBuf>,
    settings: &SettingsArgs,
    emit: impl FnOnce(&[Token], &dyn RulesContext) -> Vec<String>,
) -> Result<ExitCode> {
    let source = read_input(file)?;
    let tokens = tokenize(&source)?;
    let ctx = build_context(&tokens, settings);
    let lines = emit(&tokens, ctx.as_ref());
    let mut stdout = std::io::stdout();
    for line in &lines {
        writeln!(stdout, "{line}").expect("failed to write to stdout");
    }
    Ok(if lines.is_empty() { ExitCode::from(exitcode::OK as u8) } else { ExitCode::from(1) })
}

fn run_edit(
    file: Option<PathBuf>,
    settings: &SettingsArgs,
    edit: impl FnOnce(&mut Vec<Token>, &dyn RulesContext) -> portfmt_core::Result<()>,
) -> Result<ExitCode> {
    let source = read_input(file.clone())?;
    let mut tokens = tokenize(&source)?;
    let ctx = build_context(&tokens, settings);
    edit(&mut tokens, ctx.as_ref())?;

    let parser_settings = settings.to_parser_settings();
    let formatted = portfmt_render::render(&tokens, &parser_settings, ctx.as_ref());
    emit_result(&source, &formatted, file, settings)
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let _ = tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init();
}

/// Entry point for the `portfmt` binary.
#[must_use]
pub fn run() -> ExitCode {
    match Cli::default().run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("portfmt: {err}");
            let code = match &err {
                Error::ReadFile { .. } | Error::WriteFile { .. } => exitcode::IOERR,
                Error::Core { source: portfmt_core::Error::Io { .. } } => exitcode::IOERR,
                Error::InvalidArgument { .. } => exitcode::USAGE,
                Error::Core { .. } => exitcode::DATAERR,
            };
            ExitCode::from(code as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Cli, Commands};

    #[test]
    fn test_default_is_format() {
        let cli = Cli::parse_from(["portfmt", "foo.mk"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file.unwrap().to_str().unwrap(), "foo.mk");
    }

    #[test]
    fn test_command_lint_clones() {
        match Cli::parse_from(["portfmt", "lint-clones"]).command {
            Some(Commands::LintClones { file: None }) => (),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_command_set_version() {
        match Cli::parse_from(["portfmt", "set-version", "2.0", "foo.mk"]).command {
            Some(Commands::SetVersion { version, file: Some(_), .. }) => assert_eq!(version, "2.0"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_command_completions() {
        match Cli::parse_from(["portfmt", "completions", "bash"]).command {
            Some(Commands::Completions { .. }) => (),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
