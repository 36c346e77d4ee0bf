use crate::{
    ir::{CaseDescriptor, PayloadShape, RawCase, RegionPath},
    misc::{accessor_ident, binding_ident},
    scan::Scan,
    self_type::ReplaceSelf,
    validate::ValidatedDeclaration,
};

/// Describes every case in declaration order, each paired with the region
/// path it was declared under.
pub fn enumerate(validated: &ValidatedDeclaration) -> darling::Result<Vec<(RegionPath, CaseDescriptor)>> {
    let mut enumerator = CaseEnumerator {
        self_ty: validated.declaration.self_ty(),
        cases: Vec::new(),
    };
    enumerator.scan_declaration(&validated.declaration)?;
    Ok(enumerator.cases)
}

struct CaseEnumerator {
    self_ty: syn::Type,
    cases: Vec<(RegionPath, CaseDescriptor)>,
}

impl CaseEnumerator {
    fn describe(&self, case: &RawCase) -> CaseDescriptor {
        let mut replace_self = ReplaceSelf::new(&self.self_ty);
        let shape = PayloadShape::from_parameters(&case.parameters, |ty| replace_self.rewrite(ty));
        CaseDescriptor {
            ident: case.ident.clone(),
            accessor: accessor_ident(&case.ident),
            style: case.style,
            shape,
            bindings: (0..case.parameters.len()).map(binding_ident).collect(),
            attrs: case
                .attrs
                .iter()
                .filter(|attr| is_forwarded(attr))
                .cloned()
                .collect(),
        }
    }
}

impl<'ir> Scan<'ir> for CaseEnumerator {
    fn scan_case(&mut self, case: &'ir RawCase, path: &RegionPath) -> darling::Result<()> {
        let descriptor = self.describe(case);
        self.cases.push((path.clone(), descriptor));
        Ok(())
    }
}

fn is_forwarded(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("doc") || attr.path().is_ident("deprecated")
}
