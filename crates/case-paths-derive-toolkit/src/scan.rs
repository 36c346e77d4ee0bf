use crate::ir::{Branch, ConditionalBlock, RawCase, Region, RegionPath, UnionDeclaration};

/// Depth-first walk over a declaration's region tree.
///
/// Cases are visited in declaration order, each with the path of branches
/// leading to it. Override a method to hook a node and call the free function
/// of the same name to keep descending.
pub trait Scan<'ir> {
    fn scan_declaration(&mut self, declaration: &'ir UnionDeclaration) -> darling::Result<()> {
        scan_declaration(self, declaration)
    }

    fn scan_regions(&mut self, regions: &'ir [Region], path: &RegionPath) -> darling::Result<()> {
        scan_regions(self, regions, path)
    }

    fn scan_conditional(
        &mut self,
        block: &'ir ConditionalBlock,
        index: usize,
        path: &RegionPath,
    ) -> darling::Result<()> {
        scan_conditional(self, block, index, path)
    }

    fn scan_branch(&mut self, branch: &'ir Branch, path: &RegionPath) -> darling::Result<()> {
        scan_branch(self, branch, path)
    }

    fn scan_case(&mut self, case: &'ir RawCase, path: &RegionPath) -> darling::Result<()> {
        scan_case(self, case, path)
    }
}

pub fn scan_declaration<'ir, V>(
    visitor: &mut V,
    declaration: &'ir UnionDeclaration,
) -> darling::Result<()>
where
    V: Scan<'ir> + ?Sized,
{
    visitor.scan_regions(&declaration.regions, &RegionPath::default())
}

pub fn scan_regions<'ir, V>(
    visitor: &mut V,
    regions: &'ir [Region],
    path: &RegionPath,
) -> darling::Result<()>
where
    V: Scan<'ir> + ?Sized,
{
    let mut errors = darling::Error::accumulator();
    for (index, region) in regions.iter().enumerate() {
        match region {
            Region::Cases(cases) => {
                for case in cases {
                    errors.handle_in(|| visitor.scan_case(case, path));
                }
            }
            Region::Conditional(block) => {
                errors.handle_in(|| visitor.scan_conditional(block, index, path));
            }
        }
    }
    errors.finish()
}

pub fn scan_conditional<'ir, V>(
    visitor: &mut V,
    block: &'ir ConditionalBlock,
    index: usize,
    path: &RegionPath,
) -> darling::Result<()>
where
    V: Scan<'ir> + ?Sized,
{
    let mut errors = darling::Error::accumulator();
    for (branch_index, branch) in block.branches.iter().enumerate() {
        let child = path.child(index, branch_index, &branch.cfg);
        errors.handle_in(|| visitor.scan_branch(branch, &child));
    }
    errors.finish()
}

pub fn scan_branch<'ir, V>(
    visitor: &mut V,
    branch: &'ir Branch,
    path: &RegionPath,
) -> darling::Result<()>
where
    V: Scan<'ir> + ?Sized,
{
    visitor.scan_regions(&branch.regions, path)
}

pub fn scan_case<'ir, V>(
    _visitor: &mut V,
    _case: &'ir RawCase,
    _path: &RegionPath,
) -> darling::Result<()>
where
    V: Scan<'ir> + ?Sized,
{
    Ok(())
}
