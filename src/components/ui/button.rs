use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-5 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-ring/50 focus-visible:ring-[3px] hover:cursor-pointer active:scale-[0.92] touch-manipulation [-webkit-tap-highlight-color:transparent] select-none [-webkit-touch-callout:none]",
        variants: {
            variant: {
                Default: "bg-[#FF6B6B] text-white shadow-md hover:bg-[#FF6B6B]/90",
                Destructive: "bg-[#FF4757] text-white shadow-md hover:bg-[#FF4757]/90",
                Success: "bg-[#2ED573] text-white shadow-md hover:bg-[#2ED573]/90",
                Share: "bg-[#3742fa] text-white shadow-md hover:bg-[#3742fa]/90",
                Ghost: "text-muted-foreground hover:bg-black/5",
            },
            size: {
                Default: "h-12 px-8 rounded-[24px] text-base",
                Sm: "h-8 px-3",
                Icon: "size-10 rounded-full",
                Rating: "size-16 rounded-full text-3xl",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
