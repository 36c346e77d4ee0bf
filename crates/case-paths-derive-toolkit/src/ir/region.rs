use super::declaration::RawCase;
use quote::ToTokens;
use syn::{Token, punctuated::Punctuated};

/// A run of the enum body: either plain cases or a `#[cfg]` chain.
#[derive(Debug, Clone)]
pub enum Region {
    Cases(Vec<RawCase>),
    Conditional(ConditionalBlock),
}

/// An if / else-if / else chain recovered from the `#[cfg]` predicates of
/// consecutive variants.
#[derive(Debug, Clone)]
pub struct ConditionalBlock {
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    If,
    ElseIf,
    Else,
}

#[derive(Debug, Clone)]
pub struct Branch {
    pub kind: BranchKind,
    /// The `#[cfg(..)]` attribute exactly as written on the variants.
    pub cfg: syn::Attribute,
    /// The branch's own condition; `None` for `Else`.
    pub condition: Option<syn::Meta>,
    pub regions: Vec<Region>,
}

/// Where a case sits in the region tree, outermost step first.
#[derive(Debug, Clone, Default)]
pub struct RegionPath {
    steps: Vec<RegionStep>,
}

#[derive(Debug, Clone)]
pub struct RegionStep {
    /// Index of the conditional region among its siblings.
    pub region: usize,
    /// Index of the branch inside that region.
    pub branch: usize,
    pub cfg: syn::Attribute,
}

impl RegionStep {
    pub fn same_position(&self, other: &Self) -> bool {
        self.region == other.region && self.branch == other.branch
    }
}

impl RegionPath {
    pub fn child(&self, region: usize, branch: usize, cfg: &syn::Attribute) -> Self {
        let mut steps = self.steps.clone();
        steps.push(RegionStep {
            region,
            branch,
            cfg: cfg.clone(),
        });
        Self { steps }
    }

    pub fn steps(&self) -> &[RegionStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// True unless the paths first part at two branches of the same block,
    /// which are never compiled in together. Separate blocks are independent.
    pub fn shares_lineage(&self, other: &Self) -> bool {
        self.steps
            .iter()
            .zip(&other.steps)
            .find(|(a, b)| !a.same_position(b))
            .is_none_or(|(a, b)| a.region != b.region)
    }

    pub fn cfg_attrs(&self) -> impl Iterator<Item = &syn::Attribute> {
        self.steps.iter().map(|step| &step.cfg)
    }
}

/// A case together with its `#[cfg]` stack, outermost first.
pub(crate) struct Conditioned {
    pub(crate) cfgs: Vec<(syn::Attribute, syn::Meta)>,
    pub(crate) case: RawCase,
}

pub(crate) fn is_cfg(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("cfg")
}

pub(crate) fn cfg_predicates(
    attrs: &[syn::Attribute],
) -> darling::Result<Vec<(syn::Attribute, syn::Meta)>> {
    attrs
        .iter()
        .filter(|attr| is_cfg(attr))
        .map(|attr| Ok((attr.clone(), attr.parse_args::<syn::Meta>()?)))
        .collect()
}

struct PendingBranch {
    kind: BranchKind,
    attr: syn::Attribute,
    /// Predicate as written; later variants join the branch when theirs matches.
    predicate: syn::Meta,
    condition: Option<syn::Meta>,
    items: Vec<Conditioned>,
}

enum Group {
    Flat(Vec<RawCase>),
    Block(Vec<PendingBranch>),
}

/// Groups variants into regions using their `#[cfg]` attribute at `depth`.
///
/// Consecutive variants with the same predicate share a branch. A predicate
/// reading `not(..)` of every earlier condition in the chain continues it as
/// `Else`, and `all(not(..), q)` continues it as `ElseIf` with condition `q`.
/// Anything else opens a new block.
pub(crate) fn build_regions(items: Vec<Conditioned>, depth: usize) -> Vec<Region> {
    let mut groups: Vec<Group> = Vec::new();
    for item in items {
        let Some((attr, predicate)) = item.cfgs.get(depth).cloned() else {
            match groups.last_mut() {
                Some(Group::Flat(cases)) => cases.push(item.case),
                _ => groups.push(Group::Flat(vec![item.case])),
            }
            continue;
        };

        if let Some(Group::Block(branches)) = groups.last_mut() {
            if let Some(last) = branches.last_mut() {
                if same_meta(&last.predicate, &predicate) {
                    last.items.push(item);
                    continue;
                }
            }
            if let Some((kind, condition)) = continuation(branches, &predicate) {
                branches.push(PendingBranch {
                    kind,
                    attr,
                    predicate,
                    condition,
                    items: vec![item],
                });
                continue;
            }
        }

        groups.push(Group::Block(vec![PendingBranch {
            kind: BranchKind::If,
            attr,
            condition: Some(predicate.clone()),
            predicate,
            items: vec![item],
        }]));
    }

    groups
        .into_iter()
        .map(|group| match group {
            Group::Flat(cases) => Region::Cases(cases),
            Group::Block(branches) => Region::Conditional(ConditionalBlock {
                branches: branches
                    .into_iter()
                    .map(|branch| Branch {
                        kind: branch.kind,
                        cfg: branch.attr,
                        condition: branch.condition,
                        regions: build_regions(branch.items, depth + 1),
                    })
                    .collect(),
            }),
        })
        .collect()
}

fn continuation(
    branches: &[PendingBranch],
    predicate: &syn::Meta,
) -> Option<(BranchKind, Option<syn::Meta>)> {
    if branches.last()?.kind == BranchKind::Else {
        return None;
    }
    let prior: Vec<&syn::Meta> = branches
        .iter()
        .filter_map(|branch| branch.condition.as_ref())
        .collect();

    if negates_all(predicate, &prior) {
        return Some((BranchKind::Else, None));
    }

    let syn::Meta::List(list) = predicate else {
        return None;
    };
    if !list.path.is_ident("all") {
        return None;
    }
    let operands = nested(list)?;
    let [first, second] = operands.as_slice() else {
        return None;
    };
    if negates_all(first, &prior) {
        return Some((BranchKind::ElseIf, Some(second.clone())));
    }
    if negates_all(second, &prior) {
        return Some((BranchKind::ElseIf, Some(first.clone())));
    }
    None
}

/// `not(p)` for a single prior condition, or `not(any(p1, .., pn))`.
fn negates_all(meta: &syn::Meta, prior: &[&syn::Meta]) -> bool {
    let syn::Meta::List(list) = meta else {
        return false;
    };
    if !list.path.is_ident("not") {
        return false;
    }
    let Some(operands) = nested(list) else {
        return false;
    };
    let [negated] = operands.as_slice() else {
        return false;
    };
    if let [single] = prior {
        if same_meta(negated, single) {
            return true;
        }
    }
    let syn::Meta::List(any) = negated else {
        return false;
    };
    if !any.path.is_ident("any") {
        return false;
    }
    let Some(alternatives) = nested(any) else {
        return false;
    };
    alternatives.len() == prior.len()
        && alternatives
            .iter()
            .zip(prior)
            .all(|(alternative, condition)| same_meta(alternative, condition))
}

fn nested(list: &syn::MetaList) -> Option<Vec<syn::Meta>> {
    list.parse_args_with(Punctuated::<syn::Meta, Token![,]>::parse_terminated)
        .ok()
        .map(|items| items.into_iter().collect())
}

fn same_meta(a: &syn::Meta, b: &syn::Meta) -> bool {
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}
