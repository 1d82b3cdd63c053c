use crate::config::ChipInputConfig;
use crate::controller::ChipListController;
use crate::ChipCtx;
use core_types::{Disposition, KeyDown};
use dom::{DomError, Id};
use std::sync::Arc;

/// An event as the host delivers it: what happened and to which node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipEvent {
    KeyDown { target: Id, key: KeyDown },
    Blur { target: Id },
    Click { target: Id },
    Submit { form: Id },
}

/// What the host should do after dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// At least one controller owned the event target.
    pub handled: bool,
    pub disposition: Disposition,
    /// Node that should receive focus next, without a blur of the current one.
    pub focus: Option<Id>,
}

/// Every chip editor attached to one document, with event routing by node id.
#[derive(Debug)]
pub struct ChipInputs {
    config: Arc<ChipInputConfig>,
    controllers: Vec<ChipListController>,
}

impl ChipInputs {
    pub fn new(config: ChipInputConfig) -> Self {
        Self {
            config: Arc::new(config),
            controllers: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChipInputConfig {
        &self.config
    }

    /// Enhances one field. Returns `Ok(false)` if nothing was attached.
    pub fn mount(&mut self, ctx: &mut ChipCtx<'_>, field: Id) -> Result<bool, DomError> {
        match ChipListController::mount(ctx, field, &self.config)? {
            Some(controller) => {
                self.controllers.push(controller);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Enhances every matching field not yet carrying the ready marker.
    ///
    /// Safe to call again after markup is added; already enhanced fields are
    /// skipped. A field whose surfaces cannot be built is logged and left as is.
    pub fn mount_all(&mut self, ctx: &mut ChipCtx<'_>) -> usize {
        let config = Arc::clone(&self.config);
        let targets = ctx
            .document
            .elements_with_class(Some(config.target_tag.as_str()), &config.target_class);

        let mut mounted = 0;
        for field in targets {
            match self.mount(ctx, field) {
                Ok(true) => mounted += 1,
                Ok(false) => {}
                Err(err) => {
                    log::warn!(target: "chip_input", "skipping field {}: {err}", field.0);
                }
            }
        }
        mounted
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChipListController> {
        self.controllers.iter()
    }

    pub fn for_field(&self, field: Id) -> Option<&ChipListController> {
        self.controllers.iter().find(|c| c.field() == field)
    }

    pub fn for_field_mut(&mut self, field: Id) -> Option<&mut ChipListController> {
        self.controllers.iter_mut().find(|c| c.field() == field)
    }

    /// The field and chip index a remove button currently stands for.
    pub fn remove_target(&self, button: Id) -> Option<(Id, usize)> {
        self.controllers
            .iter()
            .find_map(|c| Some((c.field(), c.remove_index(button)?)))
    }

    pub fn dispatch(
        &mut self,
        ctx: &mut ChipCtx<'_>,
        event: ChipEvent,
    ) -> Result<EventOutcome, DomError> {
        let mut outcome = EventOutcome::default();
        match event {
            ChipEvent::KeyDown { target, key } => {
                if let Some(c) = self.controllers.iter_mut().find(|c| c.entry() == target) {
                    outcome.handled = true;
                    outcome.disposition = c.on_key_down(ctx, key)?;
                }
            }
            ChipEvent::Blur { target } => {
                if let Some(c) = self.controllers.iter_mut().find(|c| c.entry() == target) {
                    outcome.handled = true;
                    c.on_blur(ctx)?;
                }
            }
            ChipEvent::Click { target } => {
                for c in &mut self.controllers {
                    if let Some(focus) = c.on_remove_clicked(ctx, target)? {
                        outcome.handled = true;
                        outcome.focus = Some(focus);
                        break;
                    }
                }
            }
            ChipEvent::Submit { form } => {
                for c in self.controllers.iter_mut().filter(|c| c.form() == Some(form)) {
                    outcome.handled = true;
                    c.on_submit(ctx)?;
                }
            }
        }
        Ok(outcome)
    }
}

/// One-shot enhancement sweep over a freshly loaded document.
pub fn init_chip_inputs(ctx: &mut ChipCtx<'_>, config: ChipInputConfig) -> ChipInputs {
    let mut inputs = ChipInputs::new(config);
    let mounted = inputs.mount_all(ctx);
    log::debug!(target: "chip_input", "enhanced {mounted} chip fields");
    inputs
}
