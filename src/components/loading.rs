//! 加载指示
//!
//! 在途请求计数器 + 全屏遮罩组件。
//! 计数器取代单一布尔标志：并发触发时，指示器要等最后一个请求
//! 结束才熄灭，不会被先完成的请求提前清掉。

use leptos::prelude::*;

/// 加载指示上下文
///
/// 包含在途请求计数的读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct LoadingContext {
    /// 在途请求数（只读）
    pending: ReadSignal<u32>,
    /// 设置在途请求数（写入）
    set_pending: WriteSignal<u32>,
}

impl LoadingContext {
    /// 创建新的加载指示上下文
    pub fn new() -> Self {
        let (pending, set_pending) = signal(0u32);
        Self {
            pending,
            set_pending,
        }
    }

    /// 请求开始：计数加一
    pub fn begin(&self) {
        self.set_pending.try_update(|n| *n += 1);
    }

    /// 请求结束：计数减一（饱和，不会下溢）
    pub fn end(&self) {
        self.set_pending.try_update(|n| *n = n.saturating_sub(1));
    }

    /// 是否有请求在途
    pub fn is_loading(&self) -> Signal<bool> {
        let pending = self.pending;
        Signal::derive(move || pending.get() > 0)
    }

    #[cfg(test)]
    fn pending_count(&self) -> u32 {
        self.pending.get_untracked()
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取加载指示上下文
pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>().expect("LoadingContext should be provided")
}

/// 全屏加载遮罩
///
/// 只要有请求在途就覆盖整个视口。
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = use_loading();
    let is_loading = loading.is_loading();

    view! {
        <Show when=move || is_loading.get()>
            <div
                class="position-fixed top-0 start-0 w-100 h-100 d-flex justify-content-center align-items-center"
                style="background-color: rgba(255, 255, 255, 0.6); z-index: 2000;"
            >
                <div class="spinner-border text-primary" role="status">
                    <span class="visually-hidden">"載入中..."</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_nested_requests() {
        let ctx = LoadingContext::new();
        assert_eq!(ctx.pending_count(), 0);

        ctx.begin();
        ctx.begin();
        assert_eq!(ctx.pending_count(), 2);

        // 先完成的请求不会把指示器提前清掉
        ctx.end();
        assert_eq!(ctx.pending_count(), 1);

        ctx.end();
        assert_eq!(ctx.pending_count(), 0);
    }

    #[test]
    fn end_never_underflows() {
        let ctx = LoadingContext::new();
        ctx.end();
        ctx.end();
        assert_eq!(ctx.pending_count(), 0);

        ctx.begin();
        assert_eq!(ctx.pending_count(), 1);
    }
}
