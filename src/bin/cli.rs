use chrono::{Local, NaiveDate};
use renoplan::{
    EnglishLabels, LabelResolver, PricingTier, Project, ScheduleAnchor, export_cost_to_csv,
    export_timeline_to_csv, load_project_from_json, phase_state, save_project_to_json, sizing,
};
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show current project state and summary\n  area <m2>                          Set floor area\n  adults <n>                         Set number of adults\n  children <n>                       Set number of children\n  kitchen <lm>                       Set kitchen length (linear metres)\n  wardrobe <lm>                      Set wardrobe length (linear metres)\n  tier <budget|standard|premium>     Select pricing tier\n  service <space|finishes|decor> <on|off>\n                                     Toggle a service package\n  renovation <on|off>                Toggle renovation prep work\n  urgent <on|off>                    Toggle urgency surcharge\n  start <YYYY-MM-DD>                 Schedule forward from a start date\n  movein <YYYY-MM-DD>                Schedule backward from a move-in date\n  estimate                           Print the itemized cost breakdown\n  timeline                           Print the phase schedule\n  status [YYYY-MM-DD]                Print phase active/urgent flags (default today)\n  sizing                             Print recommended joinery lengths\n  meta show                          Show project metadata\n  meta name <text...>                Update project name\n  meta desc <text...>                Update project description\n  save <path>                        Save project to JSON\n  load <path>                        Load project from JSON\n  export costs <path>                Export cost breakdown to CSV\n  export timeline <path>             Export timeline to CSV\n  store save <db_path>               Save project to a SQLite store\n  store load <db_path>               Load project from a SQLite store\n  quit|exit                          Exit"
    );
}

fn on_off(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" => Some(true),
        "off" | "false" => Some(false),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn print_state(project: &Project) {
    let inputs = project.inputs();
    println!("Tier               : {}", project.tier());
    println!("Area               : {} m2", inputs.area);
    println!(
        "Household          : {} adults, {} children",
        inputs.adults, inputs.children
    );
    println!(
        "Kitchen / wardrobe : {} lm / {} lm",
        inputs.kitchen_length, inputs.wardrobe_length
    );
    println!(
        "Services           : space_planning={} interior_finishes={} furnishing_decor={}",
        inputs.services.space_planning,
        inputs.services.interior_finishes,
        inputs.services.furnishing_decor
    );
    println!(
        "Renovation / urgent: {} / {}",
        inputs.is_renovation, inputs.is_urgent
    );
    match project.anchor() {
        ScheduleAnchor::StartDate(date) => println!("Anchor             : start {}", date),
        ScheduleAnchor::MoveInDate(date) => println!("Anchor             : move-in {}", date),
    }
    println!("Summary            : {}", project.summary().to_cli_summary());
}

fn print_estimate(project: &Project) {
    let labels = EnglishLabels;
    let calc = project.cost_estimate();
    if calc.line_items.is_empty() {
        println!("No active cost items for the current inputs.");
    }
    for (group, items) in calc.grouped_line_items() {
        println!("{}", labels.resolve(group.title_key()));
        for item in items {
            println!("  {:<36} {:>10} EUR", labels.resolve(item.label_key), item.value);
        }
    }
    if calc.urgency_surcharge > 0 {
        println!(
            "  {:<36} {:>10} EUR",
            "Urgency surcharge (+20%)", calc.urgency_surcharge
        );
    }
    println!("  {:<36} {:>10} EUR", "Total", calc.total);
    println!(
        "  {:<36} {:>10} EUR - {} EUR",
        "Expected range", calc.low_estimate, calc.high_estimate
    );
    let (headline_low, headline_high) = calc.headline_range();
    println!(
        "  {:<36} {:>10} EUR - {} EUR",
        "Headline range", headline_low, headline_high
    );
}

fn print_timeline(project: &Project) {
    let timeline = project.timeline(&EnglishLabels);
    println!(
        "{} weeks, {} to {}",
        timeline.total_weeks, timeline.start_date, timeline.end_date
    );
    for phase in &timeline.phases {
        println!(
            "{} [weeks {}-{}] {} ({} to {})",
            phase.id, phase.week_start, phase.week_end, phase.title, phase.start_date,
            phase.end_date
        );
        println!("    {}", phase.site_status);
        for task in &phase.tasks {
            let marker = if task.critical { "*" } else { " " };
            println!("    {} {}", marker, task.label);
        }
    }
}

fn print_status(project: &Project, now: NaiveDate) {
    let timeline = project.timeline(&EnglishLabels);
    println!("Phase status on {}:", now);
    for phase in &timeline.phases {
        let state = phase_state(phase, now);
        println!(
            "{:<8} {:<28} active={:<5} urgent={}",
            phase.id, phase.title, state.is_active, state.is_urgent
        );
    }
}

fn print_sizing(project: &Project) {
    let inputs = project.inputs();
    let kitchen_rec = sizing::recommended_kitchen_length(inputs.adults, inputs.children);
    let wardrobe_rec = sizing::recommended_wardrobe_length(inputs.adults, inputs.children);
    println!(
        "Kitchen : selected {:.1} lm, recommended {:.1} lm ({})",
        inputs.kitchen_length,
        kitchen_rec,
        sizing::fit_status(inputs.kitchen_length, kitchen_rec).as_str()
    );
    println!(
        "Wardrobe: selected {:.1} lm, recommended {:.1} lm ({})",
        inputs.wardrobe_length,
        wardrobe_rec,
        sizing::fit_status(inputs.wardrobe_length, wardrobe_rec).as_str()
    );
}

fn print_metadata(project: &Project) {
    let metadata = project.metadata();
    println!("Project name       : {}", metadata.project_name);
    println!("Project description: {}", metadata.project_description);
}

#[cfg(feature = "sqlite")]
fn handle_store(project: &mut Project, action: Option<&str>, path: Option<&str>) {
    use renoplan::{ProjectStore, SqliteProjectStore};
    match (action, path) {
        (Some("save"), Some(path)) => match SqliteProjectStore::new(path) {
            Ok(store) => match store.save_project(project) {
                Ok(_) => println!("Project saved to store {}.", path),
                Err(e) => println!("Error saving project: {}", e),
            },
            Err(e) => println!("Error opening store: {}", e),
        },
        (Some("load"), Some(path)) => match SqliteProjectStore::new(path) {
            Ok(store) => match store.load_project() {
                Ok(Some(loaded)) => {
                    *project = loaded;
                    println!("Project loaded from store {}.", path);
                    print_state(project);
                }
                Ok(None) => println!("Store {} holds no project.", path),
                Err(e) => println!("Error loading project: {}", e),
            },
            Err(e) => println!("Error opening store: {}", e),
        },
        _ => println!("Usage: store save|load <db_path>"),
    }
}

#[cfg(not(feature = "sqlite"))]
fn handle_store(_project: &mut Project, _action: Option<&str>, _path: Option<&str>) {
    println!("Rebuild with the `sqlite` feature to enable the project store.");
}

fn main() {
    let mut project = Project::starting_on(Local::now().date_naive());

    println!("Renovation Planner (CLI) - type 'help' for commands\n");
    print_state(&project);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print_state(&project),
            "estimate" => print_estimate(&project),
            "timeline" => print_timeline(&project),
            "sizing" => print_sizing(&project),
            "status" => {
                let now = match parts.next() {
                    Some(raw) => match parse_date(raw) {
                        Some(date) => date,
                        None => {
                            println!("Invalid date (YYYY-MM-DD)");
                            continue;
                        }
                    },
                    None => Local::now().date_naive(),
                };
                print_status(&project, now);
            }
            "area" | "kitchen" | "wardrobe" => {
                let value = match parts.next().and_then(|v| v.parse::<f64>().ok()) {
                    Some(v) => v,
                    None => {
                        println!("Usage: {} <number>", cmd);
                        continue;
                    }
                };
                let result = project.update_inputs_with(|inputs| match cmd {
                    "area" => inputs.area = value,
                    "kitchen" => inputs.kitchen_length = value,
                    _ => inputs.wardrobe_length = value,
                });
                match result {
                    Ok(_) => println!("{}", project.summary().to_cli_summary()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "adults" | "children" => {
                let value = match parts.next().and_then(|v| v.parse::<u32>().ok()) {
                    Some(v) => v,
                    None => {
                        println!("Usage: {} <non-negative integer>", cmd);
                        continue;
                    }
                };
                let result = project.update_inputs_with(|inputs| {
                    if cmd == "adults" {
                        inputs.adults = value;
                    } else {
                        inputs.children = value;
                    }
                });
                match result {
                    Ok(_) => print_sizing(&project),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "tier" => match parts.next().map(str::parse::<PricingTier>) {
                Some(Ok(tier)) => {
                    project.set_tier(tier);
                    println!("{}", project.summary().to_cli_summary());
                }
                Some(Err(e)) => println!("Error: {}", e),
                None => println!("Usage: tier <budget|standard|premium>"),
            },
            "service" => {
                let name = parts.next();
                let flag = parts.next().and_then(on_off);
                match (name, flag) {
                    (Some(name), Some(enabled)) => {
                        let known = matches!(name, "space" | "finishes" | "decor");
                        if !known {
                            println!("Unknown service '{}'. Use space|finishes|decor.", name);
                            continue;
                        }
                        let result = project.update_inputs_with(|inputs| match name {
                            "space" => inputs.services.space_planning = enabled,
                            "finishes" => inputs.services.interior_finishes = enabled,
                            _ => inputs.services.furnishing_decor = enabled,
                        });
                        match result {
                            Ok(_) => println!("{}", project.summary().to_cli_summary()),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: service <space|finishes|decor> <on|off>"),
                }
            }
            "renovation" | "urgent" => match parts.next().and_then(on_off) {
                Some(enabled) => {
                    let result = project.update_inputs_with(|inputs| {
                        if cmd == "renovation" {
                            inputs.is_renovation = enabled;
                        } else {
                            inputs.is_urgent = enabled;
                        }
                    });
                    match result {
                        Ok(_) => println!("{}", project.summary().to_cli_summary()),
                        Err(e) => println!("Error: {}", e),
                    }
                }
                None => println!("Usage: {} <on|off>", cmd),
            },
            "start" | "movein" => match parts.next().and_then(parse_date) {
                Some(date) => {
                    let anchor = if cmd == "start" {
                        ScheduleAnchor::StartDate(date)
                    } else {
                        ScheduleAnchor::MoveInDate(date)
                    };
                    project.set_anchor(anchor);
                    println!("{}", project.summary().to_cli_summary());
                }
                None => println!("Usage: {} <YYYY-MM-DD>", cmd),
            },
            "meta" => match parts.next() {
                Some("show") | None => print_metadata(&project),
                Some("name") => {
                    let rest: Vec<&str> = parts.collect();
                    if rest.is_empty() {
                        println!("Usage: meta name <text...>");
                        continue;
                    }
                    project.set_project_name(rest.join(" "));
                    println!("Project name updated.");
                    print_metadata(&project);
                }
                Some("desc") => {
                    let rest: Vec<&str> = parts.collect();
                    if rest.is_empty() {
                        println!("Usage: meta desc <text...>");
                        continue;
                    }
                    project.set_project_description(rest.join(" "));
                    println!("Project description updated.");
                    print_metadata(&project);
                }
                Some(other) => {
                    println!("Unknown meta command '{}'.", other);
                    println!("Usage: meta show|name|desc ...");
                }
            },
            "save" => match parts.next() {
                Some(path) => match save_project_to_json(&project, path) {
                    Ok(_) => println!("Project saved to {}.", path),
                    Err(e) => println!("Error saving project: {}", e),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_project_from_json(path) {
                    Ok(loaded) => {
                        project = loaded;
                        println!("Project loaded from {}.", path);
                        print_state(&project);
                    }
                    Err(e) => println!("Error loading project: {}", e),
                },
                None => println!("Usage: load <path>"),
            },
            "export" => {
                let what = parts.next();
                let path = parts.next();
                match (what, path) {
                    (Some("costs"), Some(path)) => match export_cost_to_csv(&project, path) {
                        Ok(_) => println!("Cost breakdown exported to {}.", path),
                        Err(e) => println!("Error exporting costs: {}", e),
                    },
                    (Some("timeline"), Some(path)) => {
                        match export_timeline_to_csv(&project, &EnglishLabels, path) {
                            Ok(_) => println!("Timeline exported to {}.", path),
                            Err(e) => println!("Error exporting timeline: {}", e),
                        }
                    }
                    _ => println!("Usage: export costs|timeline <path>"),
                }
            }
            "store" => {
                let action = parts.next();
                let path = parts.next();
                handle_store(&mut project, action, path);
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
