//! `roadgraph roads` command - libraries-versus-roads planning

use crate::cli::{Cli, RoadsArgs};
use crate::commands::format::output_by_format_result;
use roadgraph_core::bail_usage;
use roadgraph_core::config::RoadsDocument;
use roadgraph_core::error::Result;
use roadgraph_core::records;
use roadgraph_core::roads::{self, CostModel, Plan};

/// A fully specified roads problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub cities: u32,
    pub costs: CostModel,
    pub roads: Vec<(u32, u32)>,
}

impl Problem {
    /// Merge the optional document with inline flags; flags win, roads add up
    pub fn resolve(args: &RoadsArgs) -> Result<Self> {
        let document = args.file.as_deref().map(RoadsDocument::load).transpose()?;

        let cities = args.cities.or(document.as_ref().map(|doc| doc.cities));
        let library_cost = args
            .library_cost
            .or(document.as_ref().map(|doc| doc.library_cost));
        let road_cost = args
            .road_cost
            .or(document.as_ref().map(|doc| doc.road_cost));

        let (Some(cities), Some(library_cost), Some(road_cost)) = (cities, library_cost, road_cost)
        else {
            bail_usage!("roads needs --cities, --library-cost and --road-cost, or --file");
        };

        let mut roads = document.map(|doc| doc.road_pairs()).unwrap_or_default();
        roads.extend(args.road.iter().copied());

        Ok(Problem {
            cities,
            costs: CostModel::new(library_cost, road_cost),
            roads,
        })
    }
}

/// Execute the roads command
pub fn execute(cli: &Cli, args: &RoadsArgs) -> Result<()> {
    let problem = Problem::resolve(args)?;
    let plan = roads::plan(problem.cities, &problem.costs, &problem.roads)?;
    output(cli, problem.cities, &plan)
}

fn output(cli: &Cli, cities: u32, plan: &Plan) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(plan)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                for component in &plan.components {
                    let ids: Vec<String> = component.cities.iter().map(u32::to_string).collect();
                    println!(
                        "cities {}: {} libraries, {} roads, cost {}",
                        ids.join(" "),
                        component.libraries,
                        component.roads,
                        component.cost
                    );
                }
            }
            println!("total: {}", plan.total);
        },
        records => {
            println!(
                "{}",
                records::header(
                    "roads",
                    &[
                        ("cities", cities.to_string()),
                        ("library_cost", plan.costs.library_cost.to_string()),
                        ("road_cost", plan.costs.road_cost.to_string()),
                        ("total", plan.total.to_string()),
                    ]
                )
            );
            for (index, component) in plan.components.iter().enumerate() {
                for &id in &component.cities {
                    println!("{}", records::datum_line(&roads::city(id), "component", index + 1));
                }
                println!(
                    "D component={} strategy={} libraries={} roads={} cost={}",
                    index + 1,
                    component.strategy,
                    component.libraries,
                    component.roads,
                    component.cost
                );
            }
        }
    )
}
