use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use kira_pathscore::cli::{Cli, Commands, ConvertArgs, GenesetCommand, GenesetShowArgs};
use kira_pathscore::ctx::Ctx;
use kira_pathscore::geneid::{GeneResolver, IdFormat, ReferenceTable};
use kira_pathscore::geneset::{GenesetCollection, resolve_collection};
use kira_pathscore::io;
use kira_pathscore::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(args.into_config(), env!("CARGO_PKG_VERSION"));
            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Convert(args) => handle_convert(args)?,
        Commands::Geneset(args) => match args.command {
            GenesetCommand::Show(show) => handle_geneset_show(show)?,
        },
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_convert(args: ConvertArgs) -> Result<()> {
    let from: IdFormat = args.from.parse()?;
    let to: IdFormat = args.to.parse()?;

    let mut genes = args.genes;
    if let Some(path) = &args.input {
        genes.extend(read_gene_list(path)?);
    }
    if genes.is_empty() {
        anyhow::bail!("no identifiers given (pass them as arguments or with --input)");
    }

    let table = load_reference(&args.reference)?;
    let resolver = GeneResolver::new(&table, &genes, from);
    let converted = resolver.id_conversion(&genes, from, to);

    for (gene, result) in genes.iter().zip(&converted.value) {
        println!("{}\t{}", gene, result);
    }
    for d in resolver.diagnostics().iter().chain(&converted.diagnostics) {
        eprintln!("{}", d);
    }
    Ok(())
}

fn handle_geneset_show(args: GenesetShowArgs) -> Result<()> {
    let collection = GenesetCollection::load(&args.genesets)
        .with_context(|| format!("failed to load gene sets {}", args.genesets.display()))?;

    let Some(reference) = &args.reference else {
        println!("genesets ({}):", collection.source);
        for def in &collection.defs {
            println!("{}\t{}", def.id, def.genes.len());
        }
        return Ok(());
    };

    let table = load_reference(reference)?;
    let resolved = resolve_collection(collection, &table);
    println!("genesets ({}):", resolved.source);
    for gs in &resolved.resolved {
        println!(
            "{}\t{}\t{}/{}\t{:.4}",
            gs.id,
            gs.total,
            gs.genes.len(),
            gs.total,
            gs.coverage()
        );
    }
    for d in &resolved.diagnostics {
        eprintln!("{}", d);
    }
    Ok(())
}

fn load_reference(path: &Path) -> Result<ReferenceTable> {
    ReferenceTable::load(path)
        .with_context(|| format!("failed to load reference table {}", path.display()))
}

fn read_gene_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
