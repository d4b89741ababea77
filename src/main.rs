use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

mod api;
mod session;

use api::{submit_daily_entry, ApiClient, DailyEntryForm, DailyExpenseRow, MonthlySummary};
use session::Session;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

type SessionHandle = UseStateHandle<Option<Session>>;

fn expire_session(sessions: &SessionHandle) {
    session::clear_session();
    sessions.set(None);
}

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Reports,
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpRight,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} on_select={props.on_select.clone()} on_logout={props.on_logout.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let sessions = use_context::<SessionHandle>();
    let username = sessions
        .as_ref()
        .and_then(|s| s.as_ref().map(|session| session.username.clone()))
        .unwrap_or_default();

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex-1"></div>
            <div class="flex items-center gap-4">
                <span class="text-sm font-bold text-[#173E63]">{ format!("Hello {}", username) }</span>
            </div>
        </header>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
    on_logout: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Monthly Reports",
            page: Page::Reports,
            icon: icon_bar_chart,
        },
    ];

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Finance App"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.page == props.active_page;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let page = item.page;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn amount_input(label: &'static str, handle: &UseStateHandle<String>) -> Html {
    let handle = handle.clone();
    let value = (*handle).clone();
    html! {
        <div class="space-y-1">
            <label class="text-[12px] font-bold text-muted-foreground">{ label }</label>
            <input type="number" step="0.01" min="0" placeholder="0.00" value={value} oninput={Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                handle.set(input.value());
            })} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" required={true} />
        </div>
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    let sessions = use_context::<SessionHandle>();

    let form_date = use_state(|| "".to_string());
    let form_food = use_state(|| "".to_string());
    let form_transport = use_state(|| "".to_string());
    let form_salary = use_state(|| "".to_string());
    let form_coffee_sales = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // live preview of the totals the submission will send
    let preview_income = form_salary.trim().parse::<f64>().unwrap_or(0.0)
        + form_coffee_sales.trim().parse::<f64>().unwrap_or(0.0);
    let preview_expense = form_food.trim().parse::<f64>().unwrap_or(0.0)
        + form_transport.trim().parse::<f64>().unwrap_or(0.0);

    let on_submit = {
        let form_date = form_date.clone();
        let form_food = form_food.clone();
        let form_transport = form_transport.clone();
        let form_salary = form_salary.clone();
        let form_coffee_sales = form_coffee_sales.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let saving = saving.clone();
        let sessions = sessions.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let date_val = form_date.trim().to_string();
            if date_val.is_empty() {
                form_error.set(Some("Please pick a date.".to_string()));
                return;
            }

            let parsed = (
                form_food.trim().parse::<f64>(),
                form_transport.trim().parse::<f64>(),
                form_salary.trim().parse::<f64>(),
                form_coffee_sales.trim().parse::<f64>(),
            );
            let (food, transport, salary, coffee_sales) = match parsed {
                (Ok(a), Ok(b), Ok(c), Ok(d)) => (a, b, c, d),
                _ => {
                    form_error.set(Some("Enter a valid amount for each field.".to_string()));
                    return;
                }
            };

            form_error.set(None);
            form_success.set(None);
            saving.set(true);

            let form = DailyEntryForm {
                date: date_val,
                food,
                transport,
                salary,
                coffee_sales,
            };
            let client = ApiClient::new(sessions.as_ref().and_then(|s| (**s).clone()));

            let form_date = form_date.clone();
            let form_food = form_food.clone();
            let form_transport = form_transport.clone();
            let form_salary = form_salary.clone();
            let form_coffee_sales = form_coffee_sales.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let saving = saving.clone();
            let sessions = sessions.clone();
            spawn_local(async move {
                match submit_daily_entry(&client, &form).await {
                    Ok(record) => {
                        form_success.set(Some(format!(
                            "Saved entry for {}: income {}, expense {}.",
                            record.date,
                            format_amount(record.total_income),
                            format_amount(record.total_expense)
                        )));
                        form_date.set("".to_string());
                        form_food.set("".to_string());
                        form_transport.set("".to_string());
                        form_salary.set("".to_string());
                        form_coffee_sales.set("".to_string());
                    }
                    Err(err) if err.is_unauthorized() => {
                        if let Some(sessions) = sessions.as_ref() {
                            expire_session(sessions);
                        }
                    }
                    Err(err) => {
                        log::error!("daily entry submission failed: {}", err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <StatCard title="Total Income" amount={preview_income} icon={StatIcon::UpRight} />
                        <StatCard title="Total Expense" amount={preview_expense} icon={StatIcon::CreditCard} />
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add Daily Entry"}</h4>
                        <form onsubmit={on_submit}>
                            <div class="grid grid-cols-1 md:grid-cols-5 gap-3 mb-4">
                                <div class="space-y-1">
                                    <label class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                                    <input type="date" value={(*form_date).clone()} oninput={{
                                        let form_date = form_date.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            form_date.set(input.value());
                                        })
                                    }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" required={true} />
                                </div>
                                { amount_input("Food", &form_food) }
                                { amount_input("Transport", &form_transport) }
                                { amount_input("Salary", &form_salary) }
                                { amount_input("Coffee Sales", &form_coffee_sales) }
                            </div>
                            <button type="submit" class="bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[12px] font-bold" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Save Entry" } }
                            </button>
                        </form>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else if let Some(msg) = &*form_success {
                                html! { <p class="text-sm text-green-600 mt-3">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </>
            }
        ) }
    }
}

fn selected_month_year(month: &str, year: &str) -> Option<(u32, i32)> {
    let month = month.trim().parse::<u32>().ok()?;
    let year = year.trim().parse::<i32>().ok()?;
    if (1..=12).contains(&month) {
        Some((month, year))
    } else {
        None
    }
}

#[function_component(ReportsPage)]
fn reports_page() -> Html {
    let sessions = use_context::<SessionHandle>();

    let month = use_state(|| format!("{}", js_sys::Date::new_0().get_month() + 1));
    let year = use_state(|| format!("{}", js_sys::Date::new_0().get_full_year()));

    let summary = use_state(|| None::<MonthlySummary>);
    let daily = use_state(Vec::<DailyExpenseRow>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let report_status = use_state(|| None::<String>);

    let on_load = {
        let month = month.clone();
        let year = year.clone();
        let summary = summary.clone();
        let daily = daily.clone();
        let loading = loading.clone();
        let error = error.clone();
        let sessions = sessions.clone();

        Callback::from(move |_| {
            let (month_val, year_val) = match selected_month_year(&month, &year) {
                Some(pair) => pair,
                None => {
                    error.set(Some("Pick a month and year first.".to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let client = ApiClient::new(sessions.as_ref().and_then(|s| (**s).clone()));
            let summary = summary.clone();
            let daily = daily.clone();
            let loading = loading.clone();
            let error = error.clone();
            let sessions = sessions.clone();
            spawn_local(async move {
                match client.monthly_summary(month_val, year_val).await {
                    Ok(fetched) => {
                        summary.set(Some(fetched));
                    }
                    Err(err) if err.is_unauthorized() => {
                        if let Some(sessions) = sessions.as_ref() {
                            expire_session(sessions);
                        }
                        loading.set(false);
                        return;
                    }
                    Err(err) => {
                        log::error!("monthly summary fetch failed: {}", err);
                        summary.set(None);
                        daily.set(Vec::new());
                        error.set(Some(err.to_string()));
                        loading.set(false);
                        return;
                    }
                }

                match client.daily_expenses(month_val, year_val).await {
                    Ok(rows) => {
                        daily.set(rows);
                    }
                    Err(err) if err.is_unauthorized() => {
                        if let Some(sessions) = sessions.as_ref() {
                            expire_session(sessions);
                        }
                    }
                    Err(err) => {
                        log::error!("daily expenses fetch failed: {}", err);
                        daily.set(Vec::new());
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_send_report = {
        let report_status = report_status.clone();
        let sessions = sessions.clone();

        Callback::from(move |_| {
            let client = ApiClient::new(sessions.as_ref().and_then(|s| (**s).clone()));
            let report_status = report_status.clone();
            let sessions = sessions.clone();
            report_status.set(None);
            spawn_local(async move {
                match client.send_monthly_report().await {
                    Ok(()) => report_status.set(Some("Report email sent.".to_string())),
                    Err(err) if err.is_unauthorized() => {
                        if let Some(sessions) = sessions.as_ref() {
                            expire_session(sessions);
                        }
                    }
                    Err(err) => {
                        log::error!("sending monthly report failed: {}", err);
                        report_status.set(Some(format!("Could not send report: {}", err)));
                    }
                }
            });
        })
    };

    html! {
        { page_shell(
            "Monthly Reports",
            html! {},
            html! {
                <>
                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-3 items-end">
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Month"}</label>
                                <select onchange={{
                                    let month = month.clone();
                                    Callback::from(move |e: Event| {
                                        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        month.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] border-2 border-transparent rounded-[10px] px-3 py-2 text-[11px] focus:ring-2 focus:ring-[#1D617A] outline-none">
                                    { for MONTH_NAMES.iter().enumerate().map(|(idx, name)| {
                                        let value = (idx + 1).to_string();
                                        html! { <option value={value.clone()} selected={*month == value}>{ *name }</option> }
                                    }) }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Year"}</label>
                                <input type="number" value={(*year).clone()} oninput={{
                                    let year = year.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        year.set(input.value());
                                    })
                                }} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none" />
                            </div>
                            <button onclick={on_load} class="bg-[#173E63] text-white py-2 rounded-[10px] text-[12px] font-bold" disabled={*loading}>
                                { if *loading { "Loading..." } else { "Load Report" } }
                            </button>
                            <button onclick={on_send_report} class="bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[12px] font-bold">
                                {"Email Report"}
                            </button>
                        </div>
                        {
                            if let Some(msg) = &*error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else if let Some(msg) = &*report_status {
                                html! { <p class="text-sm text-muted-foreground mt-3">{ msg.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    {
                        if let Some(summary) = &*summary {
                            html! {
                                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                    <StatCard title="Total Income" amount={summary.total_income} icon={StatIcon::UpRight} />
                                    <StatCard title="Total Expense" amount={summary.total_expense} icon={StatIcon::CreditCard} />
                                    <StatCard title="Net Balance" amount={summary.net_balance} icon={StatIcon::Wallet} />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 flex justify-between items-center border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Daily Breakdown"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Date"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Income"}</th>
                                        <th class="px-8 py-4 font-bold text-right">{"Expense"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if daily.is_empty() {
                                        html! { <tr><td colspan="3" class="px-8 py-6 text-center text-muted-foreground">{"No rows loaded."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for daily.iter().map(|row| html! {
                                                    <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-8 py-4 text-muted-foreground">{ row.date.clone() }</td>
                                                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_amount(row.income) }</td>
                                                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_amount(row.expense) }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let icon = match props.icon {
        StatIcon::UpRight => icon_arrow_up_right(),
        StatIcon::CreditCard => icon_credit_card(),
        StatIcon::Wallet => icon_wallet(),
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <div class="flex items-center gap-2 mb-1">
                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon }</div>
                <span class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</span>
            </div>
            <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_amount(props.amount) }</h3>
        </div>
    }
}

fn format_with_commas(value: i64) -> String {
    let is_negative = value < 0;
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let formatted: String = out.into_iter().rev().collect();
    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        format_with_commas((cents / 100).abs()),
        (cents % 100).abs()
    )
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let sessions: SessionHandle = use_state(session::load_session);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let on_logout = {
        let sessions = sessions.clone();
        Callback::from(move |_| {
            session::clear_session();
            sessions.set(None);
        })
    };

    if sessions.is_none() {
        let on_authenticated = {
            let sessions = sessions.clone();
            Callback::from(move |new_session: Session| {
                session::save_session(&new_session);
                sessions.set(Some(new_session));
            })
        };
        return html! { <AuthScreen {on_authenticated} /> };
    }

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Reports => html! { <ReportsPage /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={sessions.clone()}>
            <Layout active_page={*active_page} on_select={on_select} on_logout={on_logout}>
                { content }
            </Layout>
        </ContextProvider<SessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_authenticated: Callback<Session>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let username = use_state(|| "".to_string());
    let password = use_state(|| "".to_string());
    let confirm_password = use_state(|| "".to_string());
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let username = username.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();
            let confirm_val = (*confirm_password).clone();
            let on_authenticated = on_authenticated.clone();

            if username_val.is_empty() || password_val.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            if !*is_login && password_val != confirm_val {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);
            notice.set(None);

            let login_mode = *is_login;
            let is_login = is_login.clone();
            let error_async = error.clone();
            let notice_async = notice.clone();
            let loading_async = loading.clone();
            spawn_local(async move {
                let client = ApiClient::new(None);
                if login_mode {
                    match client.login(&username_val, &password_val).await {
                        Ok(new_session) => on_authenticated.emit(new_session),
                        Err(err) => {
                            log::error!("login failed: {}", err);
                            error_async.set(Some(err.to_string()));
                        }
                    }
                } else {
                    match client.register(&username_val, &password_val).await {
                        Ok(()) => {
                            is_login.set(true);
                            notice_async.set(Some("Account created. Sign in.".to_string()));
                        }
                        Err(err) => {
                            log::error!("registration failed: {}", err);
                            error_async.set(Some(err.to_string()));
                        }
                    }
                }
                loading_async.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            error.set(None);
            notice.set(None);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{ if *is_login { "Finance App" } else { "Create account" } }</h1>
                    <p class="text-sm text-muted-foreground mt-2">
                        { if *is_login { "Sign in to continue." } else { "Start tracking your finances." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Username"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*username).clone()}
                            required={true}
                            oninput={{
                                let username = username.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    username.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-foreground">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                            value={(*password).clone()}
                            required={true}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-foreground">{"Confirm Password"}</label>
                            <input
                                type="password"
                                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                                value={(*confirm_password).clone()}
                                required={true}
                                oninput={{
                                    let confirm_password = confirm_password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        confirm_password.set(input.value());
                                    })
                                }}
                            />
                        </div>
                    }

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }
                    if let Some(msg) = &*notice {
                        <div class="text-sm text-green-600">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else if *is_login { "Login" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    { if *is_login { "No account?" } else { "Already have an account?" } }
                    <button class="ml-2 text-primary font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567), "1,234,567");
        assert_eq!(format_with_commas(-45000), "-45,000");
    }

    #[test]
    fn amounts_render_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(99.999), "100.00");
        assert_eq!(format_amount(-250.25), "-250.25");
    }

    #[test]
    fn month_year_selection_validates_range() {
        assert_eq!(selected_month_year("3", "2024"), Some((3, 2024)));
        assert_eq!(selected_month_year(" 12 ", "2023"), Some((12, 2023)));
        assert_eq!(selected_month_year("0", "2024"), None);
        assert_eq!(selected_month_year("13", "2024"), None);
        assert_eq!(selected_month_year("", "2024"), None);
        assert_eq!(selected_month_year("3", "year"), None);
    }
}
