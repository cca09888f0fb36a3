use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{sign_in, use_auth};
use crate::components::loading::use_loading;

/// 登录页
///
/// 除 HTML 输入约束（email 格式、必填）外不做客户端校验。
/// 登录失败时在表单上方展示行内横幅，表单字段保持原样。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let loading = use_loading();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        loading.begin();
        spawn_local(async move {
            if let Err(message) = sign_in(auth, user, pass).await {
                // 失败路径：视图仍在，横幅展示服务端消息
                set_error_msg.try_set(Some(message));
            }
            // 成功路径：视图已切换，try_* 写入退化为空操作
            set_is_submitting.try_set(false);
            loading.end();
        });
    };

    view! {
        <div class="container login">
            <div class="row justify-content-center">
                <h1 class="h3 mb-3 font-weight-normal">"請先登入"</h1>
                <div class="col-8">
                    <form id="form" class="form-signin" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div class="alert alert-danger" role="alert">
                                {move || format!("登入失敗：{}", error_msg.get().unwrap_or_default())}
                            </div>
                        </Show>
                        <div class="form-floating mb-3">
                            <input
                                type="email"
                                class="form-control"
                                id="username"
                                placeholder="name@example.com"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                required
                                autofocus
                            />
                            <label for="username">"Email address"</label>
                        </div>
                        <div class="form-floating">
                            <input
                                type="password"
                                class="form-control"
                                id="password"
                                placeholder="Password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                            <label for="password">"Password"</label>
                        </div>
                        <button
                            class="btn btn-lg btn-primary w-100 mt-3"
                            type="submit"
                            disabled=move || is_submitting.get()
                        >
                            "登入"
                        </button>
                    </form>
                </div>
            </div>
            <p class="mt-5 mb-3 text-muted">"© 2024~∞ - 六角學院"</p>
        </div>
    }
}
