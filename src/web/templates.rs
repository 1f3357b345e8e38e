use minijinja::{Environment, Value};

/// Name of the record list view.
pub const TEMPLATE_INDEX: &str = "index.html";
/// Name of the entry form view.
pub const TEMPLATE_ADD_RECORD: &str = "add-record.html";

/// Template environment with the page sources embedded at compile time.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_INDEX, include_str!("../../templates/index.html"))?;
        env.add_template(
            TEMPLATE_ADD_RECORD,
            include_str!("../../templates/add-record.html"),
        )?;

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
