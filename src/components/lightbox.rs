use leptos::prelude::*;

/// 图片灯箱
///
/// 受控组件：可见性完全由 `open`/`src` 状态驱动，没有命令式的
/// show/hide 句柄。组件常驻挂载，重新打开只是更新绑定的 URL
/// 并再次置位 `open`。点击背景触发 `on_close`。
#[component]
pub fn Lightbox(
    /// 是否展开
    #[prop(into)]
    open: Signal<bool>,
    /// 展示的图片 URL
    #[prop(into)]
    src: Signal<String>,
    /// 关闭请求回调
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if open.get() { "modal fade show d-block" } else { "modal fade" }
            }
            style=move || {
                if open.get() { "background-color: rgba(0, 0, 0, 0.5);" } else { "" }
            }
            tabindex="-1"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-dialog modal-dialog-centered"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-content d-flex align-items-center">
                    <div class="">
                        <img src=move || src.get() alt="" width="100%" height="100%" />
                    </div>
                </div>
            </div>
        </div>
    }
}
