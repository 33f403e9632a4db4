use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use dvr::framework::{Metric, ProtocolParams};
use dvr::{Link, Topology};
use serde::Deserialize;

use crate::system::{AddressSystem, IndexedSystem};

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Routers {
    /// nodes 0..N
    Count(u32),
    Named(Vec<String>),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NodeRef {
    Index(u32),
    Name(String),
}

impl NodeRef {
    fn index(&self) -> anyhow::Result<u32> {
        match self {
            NodeRef::Index(id) => Ok(*id),
            NodeRef::Name(name) => name
                .parse()
                .map_err(|_| anyhow!("expected a node index, got {name:?}")),
        }
    }

    fn name(&self) -> String {
        match self {
            NodeRef::Index(id) => id.to_string(),
            NodeRef::Name(name) => name.clone(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LinkConfig {
    pub from: NodeRef,
    pub to: NodeRef,
    /// omitted for hop count links
    #[serde(default = "unit_cost")]
    pub cost: Metric,
}

fn unit_cost() -> Metric {
    1
}

#[derive(Deserialize, Debug)]
pub struct SimConfig {
    pub routers: Routers,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    pub max_metric: Option<Metric>,
    pub max_rounds: Option<usize>,
    pub seed_unreachable: Option<bool>,
}

/// The topology described by a config, in the addressing scheme it uses
pub enum Network {
    Indexed(Topology<IndexedSystem>),
    Named(Topology<AddressSystem>),
}

impl SimConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::parse(&data).with_context(|| format!("failed to parse '{}'", path.display()))
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Lab network used when no config file is given
    pub fn builtin() -> Self {
        let links = [(0, 1, 1), (0, 2, 3), (0, 3, 1), (1, 2, 1), (2, 3, 2)]
            .into_iter()
            .map(|(from, to, cost)| LinkConfig {
                from: NodeRef::Index(from),
                to: NodeRef::Index(to),
                cost,
            })
            .collect();
        Self {
            routers: Routers::Count(4),
            links,
            max_metric: None,
            max_rounds: Some(10),
            seed_unreachable: None,
        }
    }

    /// Applies the values set in the config on top of `defaults`
    pub fn params(&self, defaults: ProtocolParams) -> ProtocolParams {
        ProtocolParams {
            max_metric: self.max_metric.unwrap_or(defaults.max_metric),
            seed_unreachable: self.seed_unreachable.unwrap_or(defaults.seed_unreachable),
            max_rounds: self.max_rounds.or(defaults.max_rounds),
        }
    }

    pub fn network(&self) -> anyhow::Result<Network> {
        match &self.routers {
            Routers::Count(count) => {
                let links = self
                    .links
                    .iter()
                    .map(|link| -> anyhow::Result<Link<IndexedSystem>> {
                        Ok(Link::new(link.from.index()?, link.to.index()?, link.cost))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(Network::Indexed(Topology::build(0..*count, links)))
            }
            Routers::Named(names) => {
                let links = self
                    .links
                    .iter()
                    .map(|link| Link::new(link.from.name(), link.to.name(), link.cost));
                Ok(Network::Named(Topology::build(names.iter().cloned(), links)))
            }
        }
    }
}
