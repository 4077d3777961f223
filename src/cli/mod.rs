//! WP-007: CLI subcommands — init, validate, recipes, plan, shopping, render.

use crate::core::classifier::Classifier;
use crate::core::error::{Error, Result};
use crate::core::store::{Catalog, RecipeStore};
use crate::core::{parser, shopping, types};
use crate::render;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new planner directory (config + empty catalog)
    Init {
        /// Directory to initialize (default: current)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate wochenplaner.yaml
    Validate,

    /// Manage the recipe catalog
    #[command(subcommand)]
    Recipes(RecipeCommands),

    /// Create and inspect week plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Print the categorized shopping list for a plan
    Shopping {
        /// Week plan YAML file
        plan: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the printable plan document
    Render {
        /// Week plan YAML file
        plan: PathBuf,

        /// Output file (default: `output` from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a data: URI to stdout instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// List recipes
    List {
        /// Only recipes of this meal slot
        #[arg(short = 'k', long)]
        category: Option<String>,
    },

    /// List the meal slots that have recipes
    Categories,

    /// Add a recipe
    Add {
        /// Dish name
        #[arg(short, long)]
        name: String,

        /// Meal slot (Frühstück, Mittagessen, Snack, Abendessen, To-Go)
        #[arg(short = 'k', long)]
        category: String,

        /// Ingredients, separated by ';'
        #[arg(short, long)]
        ingredients: String,

        /// Preparation time (e.g. "15 Minuten")
        #[arg(short, long, default_value = "")]
        prep_time: String,

        /// Where the recipe comes from
        #[arg(short, long, default_value = "")]
        source: String,
    },

    /// Delete a recipe by name
    Delete {
        /// Dish name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// Write an empty plan with every day and slot set to "-"
    Template {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the selectable recipes per meal slot
    Options,
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands, config: &Path) -> Result<()> {
    match cmd {
        Commands::Init { path } => cmd_init(&path),
        Commands::Validate => cmd_validate(config),
        Commands::Recipes(RecipeCommands::List { category }) => {
            cmd_recipes_list(config, category.as_deref())
        }
        Commands::Recipes(RecipeCommands::Categories) => cmd_recipes_categories(config),
        Commands::Recipes(RecipeCommands::Add {
            name,
            category,
            ingredients,
            prep_time,
            source,
        }) => {
            let new = types::NewRecipe {
                name,
                category: Some(parse_slot(&category)?),
                ingredients,
                prep_time,
                source,
            };
            cmd_recipes_add(config, new)
        }
        Commands::Recipes(RecipeCommands::Delete { name }) => cmd_recipes_delete(config, &name),
        Commands::Plan(PlanCommands::Template { output }) => cmd_plan_template(output.as_deref()),
        Commands::Plan(PlanCommands::Options) => cmd_plan_options(config),
        Commands::Shopping { plan, json } => cmd_shopping(config, &plan, json),
        Commands::Render {
            plan,
            output,
            data_uri,
        } => cmd_render(config, &plan, output.as_deref(), data_uri, render::today()),
    }
}

/// Config, catalog handle, and resolved output path for one invocation.
struct Session {
    config: types::PlannerConfig,
    store: RecipeStore,
    output: PathBuf,
}

impl Session {
    fn open(config_path: &Path) -> Result<Self> {
        let config = parser::load_config_or_default(config_path)?;
        let errors = parser::validate_config(&config);
        if !errors.is_empty() {
            for e in &errors {
                eprintln!("  ERROR: {}", e);
            }
            return Err(Error::Validation(errors.len()));
        }
        let store = RecipeStore::new(parser::resolve_path(config_path, &config.catalog));
        let output = parser::resolve_path(config_path, &config.output);
        Ok(Self {
            config,
            store,
            output,
        })
    }

    fn catalog(&self) -> Result<Catalog> {
        self.store.load()
    }

    fn classifier(&self) -> Classifier {
        Classifier::from_config(&self.config)
    }
}

fn parse_slot(s: &str) -> Result<types::MealSlot> {
    s.parse().map_err(Error::UnknownCategory)
}

fn cmd_init(path: &Path) -> Result<()> {
    let config_path = path.join("wochenplaner.yaml");
    if config_path.exists() {
        return Err(Error::AlreadyExists(config_path));
    }
    std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;

    let config = types::PlannerConfig::default();
    let yaml = serde_yaml_ng::to_string(&config)?;
    std::fs::write(&config_path, yaml).map_err(|e| Error::io(&config_path, e))?;

    let store = RecipeStore::new(path.join(&config.catalog));
    let created = store.init()?;

    println!("Initialized planner at {}", path.display());
    println!("  Created: {}", config_path.display());
    if created {
        println!("  Created: {}", store.path().display());
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> Result<()> {
    let config = parser::parse_config_file(config_path)?;
    let errors = parser::validate_config(&config);

    if errors.is_empty() {
        println!(
            "OK: {} ({} keyword rules, catalog {})",
            config.title,
            config.categories.len(),
            config.catalog
        );
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  ERROR: {}", e);
        }
        Err(Error::Validation(errors.len()))
    }
}

fn cmd_recipes_list(config_path: &Path, category: Option<&str>) -> Result<()> {
    let session = Session::open(config_path)?;
    let catalog = session.catalog()?;
    if catalog.is_empty() {
        println!("No recipes yet. Add one with `wochenplaner recipes add`.");
        return Ok(());
    }

    let filter = category.map(parse_slot).transpose()?;
    let mut shown = 0;
    for recipe in catalog.filter(filter) {
        shown += 1;
        let prep = if recipe.prep_time.is_empty() {
            String::new()
        } else {
            format!(" ({})", recipe.prep_time)
        };
        println!("{} {} [{}]{}", recipe.category.icon(), recipe.name, recipe.category, prep);
        println!("    Zutaten: {}", recipe.ingredients().collect::<Vec<_>>().join(", "));
        if !recipe.source.is_empty() {
            println!("    Quelle:  {}", recipe.source);
        }
    }
    println!();
    println!("{} of {} recipe(s)", shown, catalog.len());
    Ok(())
}

fn cmd_recipes_categories(config_path: &Path) -> Result<()> {
    let catalog = Session::open(config_path)?.catalog()?;
    for slot in catalog.categories() {
        println!("{} {} ({})", slot.icon(), slot, catalog.filter(Some(slot)).count());
    }
    Ok(())
}

fn cmd_recipes_add(config_path: &Path, new: types::NewRecipe) -> Result<()> {
    let session = Session::open(config_path)?;
    let mut catalog = session.catalog()?;
    let name = catalog.add(new)?.name.clone();
    session.store.save(&catalog)?;
    println!("Added recipe '{}' ({} total)", name, catalog.len());
    Ok(())
}

fn cmd_recipes_delete(config_path: &Path, name: &str) -> Result<()> {
    let session = Session::open(config_path)?;
    let mut catalog = session.catalog()?;
    let removed = catalog.remove(name)?;
    session.store.save(&catalog)?;
    println!("Deleted recipe '{}'", removed.name);
    Ok(())
}

fn cmd_plan_template(output: Option<&Path>) -> Result<()> {
    let yaml = parser::plan_to_yaml(&types::WeekPlan::new())?;
    match output {
        Some(path) => {
            if path.exists() {
                return Err(Error::AlreadyExists(path.to_path_buf()));
            }
            std::fs::write(path, yaml).map_err(|e| Error::io(path, e))?;
            println!("Wrote plan template to {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

fn cmd_plan_options(config_path: &Path) -> Result<()> {
    let catalog = Session::open(config_path)?.catalog()?;
    for slot in types::MealSlot::ALL {
        let mut options = vec![types::NO_SELECTION];
        options.extend(catalog.options_for_slot(slot));
        println!("{} {}: {}", slot.icon(), slot, options.join(" | "));
    }
    Ok(())
}

fn cmd_shopping(config_path: &Path, plan_path: &Path, json: bool) -> Result<()> {
    let session = Session::open(config_path)?;
    let catalog = session.catalog()?;
    let plan = parser::parse_plan_file(plan_path)?;
    let list = shopping::shopping_list(&plan, &catalog, &session.classifier());

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    if list.is_empty() {
        println!("Shopping list is empty ({} meal(s) planned).", plan.filled());
        return Ok(());
    }
    println!("🛒 Einkaufsliste ({} items)", list.len());
    for (category, items) in list.iter() {
        println!();
        println!("{}", category);
        for item in items {
            println!("  ✅ {}{}", item.ingredient, render::count_suffix(item.count));
        }
    }
    Ok(())
}

fn cmd_render(
    config_path: &Path,
    plan_path: &Path,
    output: Option<&Path>,
    data_uri: bool,
    generated_on: chrono::NaiveDate,
) -> Result<()> {
    let session = Session::open(config_path)?;
    let catalog = session.catalog()?;
    let plan = parser::parse_plan_file(plan_path)?;
    let opts = render::RenderOptions::from_config(&session.config, generated_on);
    let html = render::render_document(&plan, &catalog, &session.classifier(), &opts);

    if data_uri {
        println!("{}", render::to_data_uri(&html));
        return Ok(());
    }
    let path = output.unwrap_or(session.output.as_path());
    render::write_document(path, &html)?;
    println!(
        "Rendered {} meal(s) to {}",
        plan.filled(),
        path.display()
    );
    Ok(())
}
