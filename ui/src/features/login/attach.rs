/// One-shot guard for "on attach" side effects.
///
/// Dioxus fires `onmounted` whenever an element is (re)created. Effects that
/// belong to the component's first attach, such as initial focus, go through
/// [`AttachOnce::attach`] so later re-mounts of the same element are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AttachOnce {
    attached: bool,
}

impl AttachOnce {
    /// `true` the first time it is called, `false` ever after.
    pub fn attach(&mut self) -> bool {
        !std::mem::replace(&mut self.attached, true)
    }
}
