//! Core emitter struct: per-request function generation and assembly.

use std::collections::HashSet;

use godeep_core::{NamedId, TypeEnvironment, TypeId};

use crate::format::SourceFormatter;
use crate::imports::ImportTable;
use crate::render::render_type;
use crate::request::{Request, SkipSet};
use crate::resolve::locate_type;
use crate::walk::Site;
use crate::{Config, Error, Result};

/// Go copy-method emitter over a loaded type environment.
pub struct Emitter<'a> {
    pub(crate) env: &'a TypeEnvironment,
    pub(crate) config: Config,
    pub(crate) imports: ImportTable,

    /// Types receiving a method in this run
    pub(crate) generated: HashSet<NamedId>,
    /// Skip set of the request being emitted
    pub(crate) skips: SkipSet,
    /// Named types currently being expanded, innermost last
    pub(crate) expanding: Vec<NamedId>,
    /// Loop nesting depth, for unique loop variables
    pub(crate) depth: usize,
    /// Statement buffer
    pub(crate) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(env: &'a TypeEnvironment, config: Config) -> Result<Self> {
        let target = env.target().ok_or(Error::NoPackage)?;
        Ok(Self {
            env,
            config,
            imports: ImportTable::new(target.name.as_str()),
            generated: HashSet::new(),
            skips: SkipSet::default(),
            expanding: Vec::new(),
            depth: 0,
            output: String::new(),
        })
    }

    /// Generate one method per request, then assemble and format the file.
    ///
    /// Every request is resolved before anything is emitted, so an unknown
    /// type fails the run without partial output.
    pub fn emit(mut self, requests: &[Request], formatter: &dyn SourceFormatter) -> Result<String> {
        let mut resolved = Vec::with_capacity(requests.len());
        for request in requests {
            let id = locate_type(self.env, &request.type_name)?;
            self.generated.insert(id);
            resolved.push((id, &request.skips));
        }

        let mut functions = Vec::with_capacity(resolved.len());
        for (id, skips) in resolved {
            functions.push(self.emit_function(id, skips.clone()));
        }

        let text = self.assemble(&functions);
        formatter
            .format(&text)
            .map_err(|e| Error::Formatting {
                message: e.message,
                text,
            })
    }

    fn emit_function(&mut self, id: NamedId, skips: SkipSet) -> String {
        let env = self.env;
        let named = env.named(id);
        let method = self.config.method_name.clone();
        let ptr = if self.config.pointer_receiver { "*" } else { "" };

        tracing::debug!(
            ty = %named.name,
            %method,
            pointer_receiver = self.config.pointer_receiver,
            "generating copy method"
        );

        self.skips = skips;
        self.expanding.clear();
        self.depth = 0;
        self.output.clear();

        self.line(format!(
            "// {method} generates a deep copy of {ptr}{}",
            named.name
        ));
        self.line(format!(
            "func (o {ptr}{name}) {method}() {ptr}{name} {{",
            name = named.name
        ));
        self.line(format!("cp := {ptr}o"));

        let source = if self.config.pointer_receiver { "(*o)" } else { "o" };
        self.walk(named.ty, &Site::root(source, "cp"), true);

        if self.config.pointer_receiver {
            self.line("return &cp");
        } else {
            self.line("return cp");
        }
        self.line("}");

        std::mem::take(&mut self.output)
    }

    fn assemble(&self, functions: &[String]) -> String {
        let package = self.env.target().map_or("", |p| p.name.as_str());

        let mut out = format!(
            "// Code generated by {}; DO NOT EDIT.\n\npackage {package}\n\n",
            self.config.invocation
        );
        if !self.imports.is_empty() {
            out.push_str(&self.imports.render());
            out.push('\n');
        }
        for function in functions {
            out.push_str(function);
            out.push_str("\n\n");
        }
        out
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// Run `f` against an empty buffer and return what it emitted.
    pub(crate) fn capture(&mut self, f: impl FnOnce(&mut Self)) -> String {
        let saved = std::mem::take(&mut self.output);
        f(self);
        std::mem::replace(&mut self.output, saved)
    }

    /// Go syntax for `ty`, registering any imports it needs.
    pub(crate) fn type_expr(&mut self, ty: TypeId) -> String {
        render_type(self.env, ty, &mut self.imports)
    }
}
